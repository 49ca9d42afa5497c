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

//! Owning and non-owning native object handles
//!
//! Every binding stores exactly one [`Handle`]. A handle owns one strong
//! reference to a `GObject` and releases it on drop, so a binding value is
//! always safe to use for as long as it exists.
//!
//! Objects held by an owner that never lets go of them (a builder's object
//! table) are exposed as [`Borrowed`] instead. A borrow is tied to the
//! lifetime of the binding it was obtained from and never touches the
//! reference count. Anything a setter on the owner can replace (a widget's
//! parent, a builder's current object) is returned as an owning binding.
//!
//! # Ownership rules
//!
//! - `Handle::from_full`: the caller already owns a reference (constructors
//!   of plain `GObject`s, "transfer full" getters). No extra ref is taken.
//! - `Handle::from_none`: the pointer is borrowed or floating (widget
//!   constructors, "transfer none" getters). The handle sinks or adds a
//!   reference so it owns one.

use crate::core::binding::Binding;
use crate::error::BindResult;
use glib::ffi::GType;
use glib::gobject_ffi::{self, GObject, GTypeInstance};
use glib::prelude::*;
use glib::translate::from_glib_none;
use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// One strong reference to a native `GObject`.
///
/// Handles are neither `Send` nor `Sync`: GTK objects must only be touched
/// from the thread running the main loop.
pub struct Handle {
    ptr: NonNull<GObject>,
    _not_send: PhantomData<*mut ()>,
}

impl Handle {
    /// Takes over a reference the caller already owns.
    ///
    /// Returns `None` if `ptr` is NULL.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or a live `GObject` carrying a reference that is
    /// transferred to the returned handle.
    pub unsafe fn from_full(ptr: *mut GObject) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self {
            ptr,
            _not_send: PhantomData,
        })
    }

    /// Acquires a new reference, sinking it if the object is floating.
    ///
    /// Returns `None` if `ptr` is NULL.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or a live `GObject`.
    pub unsafe fn from_none(ptr: *mut GObject) -> Option<Self> {
        let ptr = NonNull::new(ptr)?;
        // SAFETY: caller guarantees `ptr` is a live GObject.
        unsafe { gobject_ffi::g_object_ref_sink(ptr.as_ptr()) };
        Some(Self {
            ptr,
            _not_send: PhantomData,
        })
    }

    /// Creates a handle sharing ownership with a gtk-rs object.
    pub fn from_object(object: &glib::Object) -> Self {
        // SAFETY: a `glib::Object` always wraps a live, non-NULL GObject.
        unsafe {
            let ptr = gobject_ffi::g_object_ref(object.as_ptr());
            Self {
                ptr: NonNull::new_unchecked(ptr),
                _not_send: PhantomData,
            }
        }
    }

    /// Returns the raw `GObject` pointer without affecting ownership.
    pub fn as_ptr(&self) -> *mut GObject {
        self.ptr.as_ptr()
    }

    /// Returns the runtime `GType` of the object.
    pub fn gtype(&self) -> GType {
        // SAFETY: the handle keeps the instance alive; every instance has a class.
        unsafe { (*(*self.ptr.as_ptr()).g_type_instance.g_class).g_type }
    }

    /// Returns the runtime type name, e.g. `"GtkEntry"`.
    pub fn type_name(&self) -> String {
        // SAFETY: the instance is live; type names are static strings.
        unsafe {
            let name = gobject_ffi::g_type_name_from_instance(self.ptr.as_ptr() as *mut GTypeInstance);
            if name.is_null() {
                return String::from("<invalid>");
            }
            CStr::from_ptr(name).to_string_lossy().into_owned()
        }
    }

    /// Returns true if the object is an instance of `gtype` (class or interface).
    pub fn is_a(&self, gtype: GType) -> bool {
        // SAFETY: the instance is live.
        unsafe {
            gobject_ffi::g_type_check_instance_is_a(self.ptr.as_ptr() as *mut GTypeInstance, gtype)
                != glib::ffi::GFALSE
        }
    }

    /// Current reference count, for diagnostics only.
    pub fn ref_count(&self) -> u32 {
        // SAFETY: the instance is live; the field is a plain integer.
        unsafe { (*self.ptr.as_ptr()).ref_count }
    }

    /// Converts to a gtk-rs [`glib::Object`] sharing the same instance.
    pub fn to_object(&self) -> glib::Object {
        // SAFETY: the instance is live and not floating once held by a handle.
        unsafe { from_glib_none(self.ptr.as_ptr()) }
    }
}

impl Clone for Handle {
    fn clone(&self) -> Self {
        // SAFETY: the instance is live.
        unsafe { gobject_ffi::g_object_ref(self.ptr.as_ptr()) };
        Self {
            ptr: self.ptr,
            _not_send: PhantomData,
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        // SAFETY: this handle owns exactly one reference.
        unsafe { gobject_ffi::g_object_unref(self.ptr.as_ptr()) };
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl Eq for Handle {}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:p}", self.type_name(), self.ptr)
    }
}

/// A native object owned by something else, valid for `'a`.
///
/// Only handed out where the owner keeps the object until it is itself
/// finalised, so tying the view to the owner's binding is enough. Dropping
/// it does nothing; call [`Borrowed::upgrade`] to keep the object beyond
/// that lifetime.
pub struct Borrowed<'a, T: Binding> {
    ptr: NonNull<GObject>,
    _marker: PhantomData<(&'a (), fn() -> T)>,
}

impl<'a, T: Binding> Borrowed<'a, T> {
    /// # Safety
    ///
    /// `ptr` must be NULL or an instance of `T` that stays alive for `'a`.
    pub(crate) unsafe fn new<P>(ptr: *mut P) -> Option<Self> {
        NonNull::new(ptr.cast::<GObject>()).map(|ptr| Self {
            ptr,
            _marker: PhantomData,
        })
    }

    /// Returns the raw `GObject` pointer.
    pub fn as_ptr(&self) -> *mut GObject {
        self.ptr.as_ptr()
    }

    /// Runtime type name of the borrowed object.
    pub fn type_name(&self) -> String {
        // SAFETY: the object is alive for 'a, which outlives &self.
        unsafe {
            let name = gobject_ffi::g_type_name_from_instance(self.ptr.as_ptr() as *mut GTypeInstance);
            if name.is_null() {
                return String::from("<invalid>");
            }
            CStr::from_ptr(name).to_string_lossy().into_owned()
        }
    }

    /// Takes a strong reference and returns an owning binding.
    pub fn upgrade(&self) -> BindResult<T> {
        // SAFETY: the object is alive for 'a.
        unsafe { T::wrap_none(self.ptr.as_ptr(), T::TYPE_NAME) }
    }

    /// Takes a strong reference and checks the object against `U`.
    pub fn upgrade_as<U: Binding>(&self) -> BindResult<U> {
        // SAFETY: the object is alive for 'a.
        unsafe { U::wrap_none(self.ptr.as_ptr(), U::TYPE_NAME) }
    }
}

impl<T: Binding> fmt::Debug for Borrowed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Borrowed<{}> @ {:p}", self.type_name(), self.ptr)
    }
}
