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

use crate::capabilities::Buildable;
use crate::core::binding::{binding, Binding, IsA};
use crate::core::translate::{from_gboolean, optional_ptr, to_cstring, to_gboolean, to_optional_cstring};
use crate::error::BindResult;
use crate::widgets::widget::Widget;
use glib::translate::from_glib_none;
use gtk4::ffi;
use std::ptr;

binding!(
    /// A push button that emits `clicked`.
    Button,
    ffi::GtkButton,
    "GtkButton",
    ffi::gtk_button_get_type,
    extends Widget
);

impl Buildable for Button {}

impl Button {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; the floating result is sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_button_new(), "gtk_button_new") }
    }

    pub fn with_label(label: &str) -> BindResult<Self> {
        let c_label = to_cstring(label)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { Self::wrap_none(ffi::gtk_button_new_with_label(c_label.as_ptr()), "gtk_button_new_with_label") }
    }

    /// An underscore in `label` marks the mnemonic character.
    pub fn with_mnemonic(label: &str) -> BindResult<Self> {
        let c_label = to_cstring(label)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { Self::wrap_none(ffi::gtk_button_new_with_mnemonic(c_label.as_ptr()), "gtk_button_new_with_mnemonic") }
    }

    pub fn from_icon_name(icon_name: &str) -> BindResult<Self> {
        let c_name = to_cstring(icon_name)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { Self::wrap_none(ffi::gtk_button_new_from_icon_name(c_name.as_ptr()), "gtk_button_new_from_icon_name") }
    }

    /// `None` unless the button was given a label.
    pub fn label(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the button; copied before returning.
        unsafe { from_glib_none(ffi::gtk_button_get_label(self.native())) }
    }

    pub fn set_label(&self, label: &str) -> BindResult<()> {
        let c_label = to_cstring(label)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { ffi::gtk_button_set_label(self.native(), c_label.as_ptr()) };
        Ok(())
    }

    pub fn icon_name(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the button; copied before returning.
        unsafe { from_glib_none(ffi::gtk_button_get_icon_name(self.native())) }
    }

    pub fn set_icon_name(&self, icon_name: Option<&str>) -> BindResult<()> {
        let c_name = to_optional_cstring(icon_name)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_button_set_icon_name(self.native(), optional_ptr(&c_name)) };
        Ok(())
    }

    pub fn has_frame(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_button_get_has_frame(self.native()) })
    }

    pub fn set_has_frame(&self, has_frame: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_button_set_has_frame(self.native(), to_gboolean(has_frame)) }
    }

    pub fn use_underline(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_button_get_use_underline(self.native()) })
    }

    pub fn set_use_underline(&self, use_underline: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_button_set_use_underline(self.native(), to_gboolean(use_underline)) }
    }

    pub fn can_shrink(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_button_get_can_shrink(self.native()) })
    }

    pub fn set_can_shrink(&self, can_shrink: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_button_set_can_shrink(self.native(), to_gboolean(can_shrink)) }
    }

    /// The content widget; for a labelled button this is the internal label.
    pub fn child(&self) -> Option<Widget> {
        // SAFETY: transfer none.
        unsafe { Widget::wrap_optional_none(ffi::gtk_button_get_child(self.native())) }
    }

    pub fn set_child<W: IsA<Widget>>(&self, child: Option<&W>) {
        let child = child.map_or(ptr::null_mut(), |c| c.upcast_ref::<Widget>().native());
        // SAFETY: NULL removes the child.
        unsafe { ffi::gtk_button_set_child(self.native(), child) }
    }
}
