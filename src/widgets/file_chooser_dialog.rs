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

//! File selection dialog

use crate::capabilities::{Buildable, FileChooser};
use crate::core::binding::{binding, Binding};
use crate::core::translate::{optional_ptr, to_optional_cstring};
use crate::error::BindResult;
use crate::widgets::dialog::{Dialog, DialogExt};
use crate::widgets::widget::Widget;
use crate::widgets::window::Window;
use gtk4::ffi;
use std::ffi::c_char;
use std::ptr;

binding!(
    /// A dialog wrapping a file chooser. All selection methods come from [`FileChooser`].
    FileChooserDialog,
    ffi::GtkFileChooserDialog,
    "GtkFileChooserDialog",
    ffi::gtk_file_chooser_dialog_get_type,
    extends Widget,
    Window,
    Dialog
);

impl FileChooser for FileChooserDialog {}
impl Buildable for FileChooserDialog {}

impl FileChooserDialog {
    /// A dialog with no buttons. `parent` makes it transient for that window.
    pub fn new(title: Option<&str>, parent: Option<&Window>, action: ffi::GtkFileChooserAction) -> BindResult<Self> {
        let c_title = to_optional_cstring(title)?;
        let parent = parent.map_or(ptr::null_mut(), |p| p.native());
        // SAFETY: the button list is terminated by the NULL first button.
        unsafe {
            Self::wrap_none(
                ffi::gtk_file_chooser_dialog_new(optional_ptr(&c_title), parent, action, ptr::null::<c_char>()),
                "gtk_file_chooser_dialog_new",
            )
        }
    }

    /// A dialog with one button per `(label, response)` pair, added in order.
    pub fn with_buttons(
        title: Option<&str>,
        parent: Option<&Window>,
        action: ffi::GtkFileChooserAction,
        buttons: &[(&str, ffi::GtkResponseType)],
    ) -> BindResult<Self> {
        let dialog = Self::new(title, parent, action)?;
        for (label, response) in buttons {
            dialog.add_button(label, *response)?;
        }
        Ok(dialog)
    }
}
