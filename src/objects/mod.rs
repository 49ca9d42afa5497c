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

//! src/objects/mod.rs
//!
//! Non-widget objects: builders, buffers, models and files
//!
//! Most of these are plain `GObject`s whose constructors hand back an owned
//! reference. `Adjustment` and `TreeViewColumn` start floating and are
//! sunk on construction. `TreePath` is a boxed type, not an object, and
//! has its own owning wrapper.

pub mod adjustment;
pub mod builder;
pub mod entry_buffer;
pub mod file;
pub mod file_filter;
pub mod list_store;
pub mod text_buffer;
pub mod tree_path;
pub mod tree_view_column;

pub use adjustment::Adjustment;
pub use builder::Builder;
pub use entry_buffer::EntryBuffer;
pub use file::File;
pub use file_filter::FileFilter;
pub use list_store::ListStore;
pub use text_buffer::{TextBuffer, TextIter, TextTagTable};
pub use tree_path::TreePath;
pub use tree_view_column::TreeViewColumn;

#[cfg(test)]
mod tests;
