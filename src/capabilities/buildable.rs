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

use crate::core::binding::{binding, cast_instance, Binding};
use glib::translate::from_glib_none;
use gtk4::ffi;

/// Objects that can be created from a builder UI description.
pub trait Buildable: Binding {
    /// Interface pointer for this object.
    fn buildable_ptr(&self) -> *mut ffi::GtkBuildable {
        // SAFETY: live handle; the cast only re-types the pointer.
        unsafe { cast_instance(self.handle().as_ptr(), ffi::gtk_buildable_get_type()) }
    }

    /// The `id` attribute this object had in its UI file, if any.
    ///
    /// Returned as a copy: exposing the object to a builder replaces the id.
    fn buildable_id(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the object; copied before returning.
        unsafe { from_glib_none(ffi::gtk_buildable_get_buildable_id(self.buildable_ptr())) }
    }
}

binding!(
    /// Any object implementing `GtkBuildable`, whatever its concrete type.
    BuildableObject,
    ffi::GtkBuildable,
    "GtkBuildable",
    ffi::gtk_buildable_get_type
);

impl Buildable for BuildableObject {}
