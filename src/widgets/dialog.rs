// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dialog windows with a response area

use crate::capabilities::Buildable;
use crate::core::binding::{binding, Binding, IsA};
use crate::core::translate::{to_cstring, to_gboolean};
use crate::error::BindResult;
use crate::widgets::widget::Widget;
use crate::widgets::window::Window;
use gtk4::ffi;

binding!(
    /// A window with buttons that emit response ids.
    Dialog,
    ffi::GtkDialog,
    "GtkDialog",
    ffi::gtk_dialog_get_type,
    extends Widget,
    Window
);

impl Buildable for Dialog {}

impl Dialog {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; GTK owns the toplevel.
        unsafe { Self::wrap_none(ffi::gtk_dialog_new(), "gtk_dialog_new") }
    }
}

/// Response handling shared by all dialogs.
///
/// Response ids are the `GTK_RESPONSE_*` constants or any positive
/// application-defined value.
pub trait DialogExt: IsA<Dialog> {
    fn dialog_ptr(&self) -> *mut ffi::GtkDialog {
        self.upcast_ref::<Dialog>().native()
    }

    /// Adds a button emitting `response_id` and returns it.
    fn add_button(&self, text: &str, response_id: ffi::GtkResponseType) -> BindResult<Widget> {
        let c_text = to_cstring(text)?;
        // SAFETY: valid C string; the button is owned by the dialog.
        unsafe {
            Widget::wrap_none(
                ffi::gtk_dialog_add_button(self.dialog_ptr(), c_text.as_ptr(), response_id),
                "gtk_dialog_add_button",
            )
        }
    }

    /// Emits the `response` signal.
    fn response(&self, response_id: ffi::GtkResponseType) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_dialog_response(self.dialog_ptr(), response_id) }
    }

    fn set_default_response(&self, response_id: ffi::GtkResponseType) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_dialog_set_default_response(self.dialog_ptr(), response_id) }
    }

    fn set_response_sensitive(&self, response_id: ffi::GtkResponseType, sensitive: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_dialog_set_response_sensitive(self.dialog_ptr(), response_id, to_gboolean(sensitive)) }
    }

    fn widget_for_response(&self, response_id: ffi::GtkResponseType) -> Option<Widget> {
        // SAFETY: transfer none.
        unsafe { Widget::wrap_optional_none(ffi::gtk_dialog_get_widget_for_response(self.dialog_ptr(), response_id)) }
    }

    /// `GTK_RESPONSE_NONE` if `widget` is not in the action area.
    fn response_for_widget<W: IsA<Widget>>(&self, widget: &W) -> ffi::GtkResponseType {
        // SAFETY: both objects are live.
        unsafe { ffi::gtk_dialog_get_response_for_widget(self.dialog_ptr(), widget.upcast_ref::<Widget>().native()) }
    }
}

impl<T: IsA<Dialog>> DialogExt for T {}
