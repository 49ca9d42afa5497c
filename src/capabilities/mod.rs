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

//! src/capabilities/mod.rs
//!
//! Interface capabilities shared by several bindings
//!
//! Each native interface (`GtkFileChooser`, `GtkEditable`, ...) is a trait
//! whose methods all have default bodies. A default body reaches the
//! interface through one accessor (`file_chooser_ptr()`, `editable_ptr()`,
//! ...), which casts the binding's handle with the interface `GType`.
//!
//! Opting a binding in is a single empty impl:
//!
//! ```ignore
//! impl Editable for Entry {}
//! impl CellEditable for Entry {}
//! ```

pub mod buildable;
pub mod cell_editable;
pub mod editable;
pub mod file_chooser;
pub mod scrollable;
pub mod tree_model;

pub use buildable::{Buildable, BuildableObject};
pub use cell_editable::CellEditable;
pub use editable::Editable;
pub use file_chooser::FileChooser;
pub use scrollable::Scrollable;
pub use tree_model::{TreeIter, TreeModel};

#[cfg(test)]
mod tests;
