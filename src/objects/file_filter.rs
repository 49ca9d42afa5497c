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
use crate::core::binding::{binding, Binding};
use crate::core::translate::{optional_ptr, to_cstring, to_optional_cstring};
use crate::error::BindResult;
use glib::translate::from_glib_none;
use gtk4::ffi;

binding!(
    /// Pattern/MIME based filter for file choosers.
    FileFilter,
    ffi::GtkFileFilter,
    "GtkFileFilter",
    ffi::gtk_file_filter_get_type
);

impl Buildable for FileFilter {}

impl FileFilter {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; returns a new reference.
        unsafe { Self::wrap_full(ffi::gtk_file_filter_new(), "gtk_file_filter_new") }
    }

    pub fn name(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the filter; copied before returning.
        unsafe { from_glib_none(ffi::gtk_file_filter_get_name(self.native())) }
    }

    pub fn set_name(&self, name: Option<&str>) -> BindResult<()> {
        let c_name = to_optional_cstring(name)?;
        // SAFETY: NULL clears the name.
        unsafe { ffi::gtk_file_filter_set_name(self.native(), optional_ptr(&c_name)) };
        Ok(())
    }

    /// Adds a shell-style glob, e.g. `*.ui`.
    pub fn add_pattern(&self, pattern: &str) -> BindResult<()> {
        let c_pattern = to_cstring(pattern)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_file_filter_add_pattern(self.native(), c_pattern.as_ptr()) };
        Ok(())
    }

    pub fn add_mime_type(&self, mime_type: &str) -> BindResult<()> {
        let c_mime = to_cstring(mime_type)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_file_filter_add_mime_type(self.native(), c_mime.as_ptr()) };
        Ok(())
    }

    /// Case-insensitive suffix match, e.g. `ui`.
    pub fn add_suffix(&self, suffix: &str) -> BindResult<()> {
        let c_suffix = to_cstring(suffix)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_file_filter_add_suffix(self.native(), c_suffix.as_ptr()) };
        Ok(())
    }
}
