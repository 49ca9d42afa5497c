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

//! gtkwrap
//!
//! Typed, ownership-aware bindings over the GTK 4 C API.
//!
//! # Features
//!
//! - **Owned handles:** every binding holds one strong reference and releases
//!   it on drop; objects a builder keeps are lifetime-bound [`Borrowed`] views
//! - **Checked casts:** wrapping or casting to the wrong runtime type is a
//!   [`BindError::TypeMismatch`], never undefined behaviour
//! - **Explicit string ownership:** [`OwnedGStr`] frees "transfer full"
//!   strings once; "transfer none" strings are copied into `glib::GString`
//!   before a setter can free them
//! - **Result-returning constructors** and `GError` translation, with
//!   `_raw` pass-through variants where the native API takes a `GError**`
//! - **Capability traits:** `FileChooser`, `Editable`, `CellEditable`,
//!   `Scrollable`, `Buildable` and `TreeModel` are written once and opted
//!   into with an empty impl
//!
//! # Architecture
//!
//! - **`core`:** handles, the `Binding` trait, value translation, signals
//! - **`capabilities`:** one trait per native interface
//! - **`widgets`:** widget bindings and the `WidgetExt`/`WindowExt`/`DialogExt` hierarchy
//! - **`objects`:** builders, buffers, models and files
//! - **`error`:** the crate-wide [`BindError`]
//!
//! # Threading
//!
//! GTK is single-threaded. Bindings are neither `Send` nor `Sync` and must
//! stay on the thread that called [`init`].
//!
//! # Examples
//!
//! ## Loading a UI file
//!
//! ```no_run
//! use gtkwrap::objects::Builder;
//! use gtkwrap::widgets::{Entry, WidgetExt};
//! use gtkwrap::capabilities::Editable;
//!
//! gtkwrap::init()?;
//! let builder = Builder::from_file("login.ui")?;
//! if let Some(entry) = builder.object_as::<Entry>("username")? {
//!     entry.set_text("admin")?;
//!     entry.grab_focus();
//! }
//! # Ok::<(), gtkwrap::BindError>(())
//! ```
//!
//! ## Picking a file
//!
//! ```no_run
//! use gtkwrap::capabilities::FileChooser;
//! use gtkwrap::widgets::{FileChooserDialog, WindowExt};
//! use gtk4::ffi::{GTK_FILE_CHOOSER_ACTION_OPEN, GTK_RESPONSE_ACCEPT, GTK_RESPONSE_CANCEL};
//!
//! gtkwrap::init()?;
//! let dialog = FileChooserDialog::with_buttons(
//!     Some("Open"),
//!     None,
//!     GTK_FILE_CHOOSER_ACTION_OPEN,
//!     &[("_Cancel", GTK_RESPONSE_CANCEL), ("_Open", GTK_RESPONSE_ACCEPT)],
//! )?;
//! dialog.set_select_multiple(true);
//! dialog.present();
//! # Ok::<(), gtkwrap::BindError>(())
//! ```

pub mod capabilities;
pub mod core;
pub mod error;
pub mod objects;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use crate::core::runtime::{init, is_initialized};
pub use crate::core::{Binding, Borrowed, Handle, IsA, OwnedGStr, SignalExt, TypeWrapper};
pub use error::{BindError, BindResult};
