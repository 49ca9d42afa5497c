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

//! GIO file handles, as passed to and returned from file choosers.

use crate::core::binding::{binding, Binding};
use crate::core::translate::{from_gboolean, to_cstring, OwnedGStr};
use crate::error::BindResult;
use gtk4::gio::ffi;
use std::ffi::CString;
use std::path::Path;

binding!(
    /// A location handle (`GFile`). Creating one does no I/O.
    File,
    ffi::GFile,
    "GFile",
    ffi::g_file_get_type
);

impl File {
    pub fn for_path(path: impl AsRef<Path>) -> BindResult<Self> {
        let c_path = CString::new(path.as_ref().as_os_str().as_encoded_bytes())?;
        // SAFETY: valid C string; returns a new reference.
        unsafe { Self::wrap_full(ffi::g_file_new_for_path(c_path.as_ptr()), "g_file_new_for_path") }
    }

    pub fn for_uri(uri: &str) -> BindResult<Self> {
        let c_uri = to_cstring(uri)?;
        // SAFETY: valid C string; returns a new reference.
        unsafe { Self::wrap_full(ffi::g_file_new_for_uri(c_uri.as_ptr()), "g_file_new_for_uri") }
    }

    /// Local path, or `None` for non-native locations.
    pub fn path(&self) -> Option<OwnedGStr> {
        // SAFETY: transfer full string.
        unsafe { OwnedGStr::from_full(ffi::g_file_get_path(self.native())) }
    }

    pub fn uri(&self) -> Option<OwnedGStr> {
        // SAFETY: transfer full string.
        unsafe { OwnedGStr::from_full(ffi::g_file_get_uri(self.native())) }
    }

    pub fn basename(&self) -> Option<OwnedGStr> {
        // SAFETY: transfer full string.
        unsafe { OwnedGStr::from_full(ffi::g_file_get_basename(self.native())) }
    }

    pub fn parent(&self) -> Option<File> {
        // SAFETY: transfer full object.
        unsafe { Self::wrap_optional_full(ffi::g_file_get_parent(self.native())) }
    }

    /// Location equality (not handle identity).
    pub fn same_location(&self, other: &File) -> bool {
        // SAFETY: both handles are live.
        from_gboolean(unsafe { ffi::g_file_equal(self.native(), other.native()) })
    }
}
