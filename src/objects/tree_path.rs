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

//! Row addresses for tree models (`GtkTreePath`, a boxed type).

use crate::core::translate::{to_cstring, OwnedGStr};
use crate::error::{BindError, BindResult};
use gtk4::ffi;
use std::ffi::c_int;
use std::fmt;
use std::ptr::NonNull;
use std::slice;

/// An owned `GtkTreePath`, freed on drop.
pub struct TreePath {
    ptr: NonNull<ffi::GtkTreePath>,
}

impl TreePath {
    /// Path to the first row, `"0"`.
    pub fn first() -> BindResult<Self> {
        // SAFETY: no preconditions; returns a new path.
        unsafe { Self::from_full(ffi::gtk_tree_path_new_first()) }
            .ok_or(BindError::NullPointer("gtk_tree_path_new_first"))
    }

    /// Parses a colon-separated path such as `"3:0:2"`.
    ///
    /// Fails with [`BindError::NullPointer`] when the string is not a path.
    pub fn from_string(path: &str) -> BindResult<Self> {
        let c_path = to_cstring(path)?;
        // SAFETY: valid C string; NULL on parse failure.
        unsafe { Self::from_full(ffi::gtk_tree_path_new_from_string(c_path.as_ptr())) }
            .ok_or(BindError::NullPointer("gtk_tree_path_new_from_string"))
    }

    /// # Safety
    ///
    /// `ptr` must be NULL or a path the caller owns.
    pub unsafe fn from_full(ptr: *mut ffi::GtkTreePath) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub fn as_ptr(&self) -> *mut ffi::GtkTreePath {
        self.ptr.as_ptr()
    }

    pub fn depth(&self) -> i32 {
        // SAFETY: owned path.
        unsafe { ffi::gtk_tree_path_get_depth(self.ptr.as_ptr()) }
    }

    pub fn indices(&self) -> Vec<i32> {
        let mut depth: c_int = 0;
        // SAFETY: the array holds `depth` entries and belongs to the path.
        unsafe {
            let indices = ffi::gtk_tree_path_get_indices_with_depth(self.ptr.as_ptr(), &mut depth);
            if indices.is_null() || depth <= 0 {
                return Vec::new();
            }
            slice::from_raw_parts(indices, depth as usize).to_vec()
        }
    }

    pub fn append_index(&mut self, index: i32) {
        // SAFETY: owned path.
        unsafe { ffi::gtk_tree_path_append_index(self.ptr.as_ptr(), index) }
    }

    /// Moves to the parent. False at the top level.
    pub fn up(&mut self) -> bool {
        // SAFETY: owned path.
        unsafe { ffi::gtk_tree_path_up(self.ptr.as_ptr()) != glib::ffi::GFALSE }
    }

    /// The path in string form. Freshly allocated, freed on drop.
    pub fn to_gstring(&self) -> Option<OwnedGStr> {
        // SAFETY: transfer full string.
        unsafe { OwnedGStr::from_full(ffi::gtk_tree_path_to_string(self.ptr.as_ptr())) }
    }
}

impl Clone for TreePath {
    fn clone(&self) -> Self {
        // SAFETY: copying a valid path never returns NULL.
        Self {
            ptr: unsafe { NonNull::new_unchecked(ffi::gtk_tree_path_copy(self.ptr.as_ptr())) },
        }
    }
}

impl Drop for TreePath {
    fn drop(&mut self) {
        // SAFETY: we own the path.
        unsafe { ffi::gtk_tree_path_free(self.ptr.as_ptr()) }
    }
}

impl PartialEq for TreePath {
    fn eq(&self, other: &Self) -> bool {
        // SAFETY: both paths are owned and valid.
        unsafe { ffi::gtk_tree_path_compare(self.ptr.as_ptr(), other.ptr.as_ptr()) == 0 }
    }
}

impl Eq for TreePath {}

impl fmt::Debug for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TreePath").field(&self.indices()).finish()
    }
}
