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

//! src/widgets/mod.rs
//!
//! Widget bindings
//!
//! The GTK class hierarchy is expressed with extension traits:
//!
//! - [`WidgetExt`]: every widget
//! - [`WindowExt`]: `Window`, `Dialog`, `FileChooserDialog`
//! - [`DialogExt`]: `Dialog`, `FileChooserDialog`
//!
//! Each trait is implemented for every binding that declares the matching
//! parent in its `binding!` invocation, so no forwarding method is written
//! twice. Widget constructors return floating references, which the
//! binding sinks.

pub mod button;
pub mod dialog;
pub mod entry;
pub mod file_chooser_dialog;
pub mod file_chooser_widget;
pub mod label;
pub mod switch;
pub mod text_view;
pub mod tree_view;
pub mod widget;
pub mod window;

pub use button::Button;
pub use dialog::{Dialog, DialogExt};
pub use entry::Entry;
pub use file_chooser_dialog::FileChooserDialog;
pub use file_chooser_widget::FileChooserWidget;
pub use label::Label;
pub use switch::Switch;
pub use text_view::TextView;
pub use tree_view::{TreeView, TreeViewHit};
pub use widget::{Widget, WidgetExt};
pub use window::{Window, WindowExt};

#[cfg(test)]
mod tests;
