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

//! src/core/mod.rs
//!
//! Binding foundation
//!
//! Everything the per-type bindings are built from:
//! - Owning and borrowed native handles
//! - The `Binding` trait with checked casts
//! - Boolean, string and `GError` translation
//! - The `TypeWrapper` value box
//! - Signal connection and GTK initialisation
//!
//! Apart from `runtime`, nothing here needs a display, so it is tested
//! against plain GObject/GLib values.

pub mod binding;
pub mod handle;
pub mod runtime;
pub mod signal;
pub mod translate;
pub mod value;

pub use binding::{cast_instance, Binding, IsA, Object};
pub use handle::{Borrowed, Handle};
pub use signal::{SignalExt, SignalHandler};
pub use translate::{from_gboolean, to_gboolean, with_gerror, OwnedGStr, OwnedStrv};
pub use value::TypeWrapper;

#[cfg(test)]
mod tests;
