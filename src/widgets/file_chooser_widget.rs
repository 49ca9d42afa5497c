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

use crate::capabilities::{Buildable, FileChooser};
use crate::core::binding::{binding, Binding};
use crate::error::BindResult;
use crate::widgets::widget::Widget;
use gtk4::ffi;

binding!(
    /// An embeddable file chooser, for layouts that need a picker without a dialog.
    FileChooserWidget,
    ffi::GtkFileChooserWidget,
    "GtkFileChooserWidget",
    ffi::gtk_file_chooser_widget_get_type,
    extends Widget
);

impl FileChooser for FileChooserWidget {}
impl Buildable for FileChooserWidget {}

impl FileChooserWidget {
    pub fn new(action: ffi::GtkFileChooserAction) -> BindResult<Self> {
        // SAFETY: no preconditions; the floating result is sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_file_chooser_widget_new(action), "gtk_file_chooser_widget_new") }
    }
}
