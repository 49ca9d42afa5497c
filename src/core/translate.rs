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

//! Value translation at the C boundary
//!
//! # Strings
//!
//! Native getters return strings in two flavours, distinguished only by
//! their ownership annotation:
//!
//! - **transfer full**: a fresh `g_malloc` buffer the caller must `g_free`.
//!   Returned as [`OwnedGStr`], which frees exactly once on drop.
//! - **transfer none**: a pointer into memory the object manages. Any
//!   setter on the same object (or a clone of its binding) may free it, so
//!   getters copy it into a `glib::GString` straight away and never free
//!   the original.
//!
//! # Booleans
//!
//! `gboolean` is an `int`; any non-zero value is true.
//!
//! # Errors
//!
//! [`with_gerror`] runs a native call with a local `GError*` slot and turns
//! a filled slot into [`BindError::Native`].

use crate::core::binding::Binding;
use crate::error::{BindError, BindResult};
use glib::ffi::{self, gboolean, GError, GSList, GFALSE, GTRUE};
use glib::gobject_ffi;
use glib::translate::from_glib_full;
use gtk4::gio::ffi as gio_ffi;
use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

/// Converts a native `gboolean` (any non-zero is true).
#[inline]
pub fn from_gboolean(value: gboolean) -> bool {
    value != GFALSE
}

/// Converts to a native `gboolean` (`TRUE` or `FALSE`).
#[inline]
pub fn to_gboolean(value: bool) -> gboolean {
    if value {
        GTRUE
    } else {
        GFALSE
    }
}

/// A string allocated by the native library and owned by Rust.
///
/// Freed with `g_free` when dropped.
pub struct OwnedGStr {
    ptr: NonNull<c_char>,
}

impl OwnedGStr {
    /// Takes ownership of a "transfer full" string; NULL yields `None`.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or a NUL-terminated buffer allocated with
    /// `g_malloc` that nothing else will free.
    pub unsafe fn from_full(ptr: *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: the buffer is NUL-terminated and alive until drop.
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.ptr.as_ptr()
    }

    /// Borrows the contents as UTF-8.
    pub fn to_str(&self) -> BindResult<&str> {
        Ok(self.as_c_str().to_str()?)
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.as_c_str().to_string_lossy()
    }

    /// Copies into a Rust `String`, then releases the native buffer.
    pub fn into_string(self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl Drop for OwnedGStr {
    fn drop(&mut self) {
        // SAFETY: we own the g_malloc'd buffer.
        unsafe { ffi::g_free(self.ptr.as_ptr().cast()) };
    }
}

impl fmt::Display for OwnedGStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for OwnedGStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedGStr").field(&self.as_c_str()).finish()
    }
}

impl PartialEq<str> for OwnedGStr {
    fn eq(&self, other: &str) -> bool {
        self.as_c_str().to_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for OwnedGStr {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// A NULL-terminated string array owned by Rust, freed with `g_strfreev`.
pub struct OwnedStrv {
    ptr: NonNull<*mut c_char>,
}

impl OwnedStrv {
    /// # Safety
    ///
    /// `ptr` must be NULL or a NULL-terminated array of `g_malloc`'d
    /// strings, itself `g_malloc`'d, that nothing else will free.
    pub unsafe fn from_full(ptr: *mut *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    /// Iterates over the entries without copying.
    pub fn iter(&self) -> StrvIter<'_> {
        StrvIter {
            cursor: self.ptr.as_ptr(),
            _owner: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Copies every entry into a `Vec<String>`.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(|s| s.to_string_lossy().into_owned()).collect()
    }
}

impl Drop for OwnedStrv {
    fn drop(&mut self) {
        // SAFETY: we own the array and every string in it.
        unsafe { ffi::g_strfreev(self.ptr.as_ptr()) };
    }
}

impl fmt::Debug for OwnedStrv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over an [`OwnedStrv`].
pub struct StrvIter<'a> {
    cursor: *mut *mut c_char,
    _owner: PhantomData<&'a OwnedStrv>,
}

impl<'a> Iterator for StrvIter<'a> {
    type Item = &'a CStr;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the array is NULL-terminated and owned for 'a.
        unsafe {
            let entry = *self.cursor;
            if entry.is_null() {
                return None;
            }
            self.cursor = self.cursor.add(1);
            Some(CStr::from_ptr(entry))
        }
    }
}

/// Converts a Rust string for a `const gchar*` parameter.
pub(crate) fn to_cstring(value: &str) -> BindResult<CString> {
    Ok(CString::new(value)?)
}

/// Converts an optional string; `None` stays `None` and later maps to NULL.
pub(crate) fn to_optional_cstring(value: Option<&str>) -> BindResult<Option<CString>> {
    value.map(to_cstring).transpose()
}

/// Pointer for an optional string parameter (NULL when absent).
pub(crate) fn optional_ptr(value: &Option<CString>) -> *const c_char {
    value.as_ref().map_or(ptr::null(), |s| s.as_ptr())
}

/// Pointer for an optional out-parameter (NULL when absent).
pub(crate) fn out_ptr<T>(value: Option<&mut T>) -> *mut T {
    value.map_or(ptr::null_mut(), |v| v as *mut T)
}

/// Runs a native call that reports failure through a `GError**`.
///
/// A filled error slot wins over the returned value.
pub fn with_gerror<T, F>(call: F) -> BindResult<T>
where
    F: FnOnce(*mut *mut GError) -> T,
{
    let mut error: *mut GError = ptr::null_mut();
    let value = call(&mut error);
    if error.is_null() {
        Ok(value)
    } else {
        // SAFETY: the callee transferred a freshly allocated GError to us.
        Err(BindError::Native(unsafe { from_glib_full(error) }))
    }
}

/// Collects a `GSList` of borrowed pointers and frees the list cells.
///
/// # Safety
///
/// `list` must be NULL or a `GSList` whose cells (not data) the caller owns.
pub(crate) unsafe fn slist_into_vec<T, F>(list: *mut GSList, mut map: F) -> Vec<T>
where
    F: FnMut(ffi::gpointer) -> Option<T>,
{
    let mut items = Vec::new();
    let mut cursor = list;
    // SAFETY: walking a well-formed list the caller owns.
    unsafe {
        while !cursor.is_null() {
            if let Some(item) = map((*cursor).data) {
                items.push(item);
            }
            cursor = (*cursor).next;
        }
        ffi::g_slist_free(list);
    }
    items
}

/// Collects a "transfer full" `GListModel` of objects, releasing the model.
///
/// Items that are not instances of `T` are skipped.
///
/// # Safety
///
/// `model` must be NULL or a `GListModel` whose reference the caller owns.
pub(crate) unsafe fn list_model_into_vec<T: Binding>(model: *mut gio_ffi::GListModel) -> Vec<T> {
    if model.is_null() {
        return Vec::new();
    }
    // SAFETY: the model is live and ours; get_item returns a new reference.
    unsafe {
        let n_items = gio_ffi::g_list_model_get_n_items(model);
        let items = (0..n_items)
            .filter_map(|position| T::wrap_optional_full(gio_ffi::g_list_model_get_item(model, position)))
            .collect();
        gobject_ffi::g_object_unref(model.cast());
        items
    }
}
