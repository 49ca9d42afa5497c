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

//! Boxed `GValue` view for APIs that take a generic tagged value.

use crate::error::{BindError, BindResult};
use glib::gobject_ffi::{self, GValue};
use glib::translate::ToGlibPtrMut;
use std::ffi::c_int;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A non-owning view of a `GValue` with a cached integer reading.
///
/// The integer view is meaningful only for `G_TYPE_INT` values and reads
/// 0 otherwise, including when nothing is set. Asking for the value pointer
/// of an unset wrapper is an error rather than a NULL dereference.
#[derive(Debug, Default)]
pub struct TypeWrapper<'a> {
    ptr: Option<NonNull<GValue>>,
    int_value: c_int,
    _value: PhantomData<&'a mut GValue>,
}

impl<'a> TypeWrapper<'a> {
    /// An unset wrapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Views an existing value for the duration of the borrow.
    pub fn from_value(value: &'a mut glib::Value) -> Self {
        let int_value = value.get::<i32>().unwrap_or(0);
        let ptr = NonNull::new(value.to_glib_none_mut().0);
        Self {
            ptr,
            int_value,
            _value: PhantomData,
        }
    }

    /// Views a raw `GValue`; NULL yields an unset wrapper.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or an initialised `GValue` valid for `'a`.
    pub unsafe fn from_raw(ptr: *mut GValue) -> Self {
        let Some(ptr) = NonNull::new(ptr) else {
            return Self::default();
        };
        // SAFETY: forwarded from the caller.
        let int_value = unsafe {
            if (*ptr.as_ptr()).g_type == gobject_ffi::G_TYPE_INT {
                gobject_ffi::g_value_get_int(ptr.as_ptr())
            } else {
                0
            }
        };
        Self {
            ptr: Some(ptr),
            int_value,
            _value: PhantomData,
        }
    }

    /// The cached `gint` reading (0 unless an int value is set).
    pub fn int_value(&self) -> i32 {
        self.int_value
    }

    pub fn is_set(&self) -> bool {
        self.ptr.is_some()
    }

    /// The wrapped value pointer, for native calls that take a `GValue*`.
    pub fn as_gvalue_ptr(&self) -> BindResult<*mut GValue> {
        self.ptr.map(NonNull::as_ptr).ok_or(BindError::UnsetValue)
    }
}
