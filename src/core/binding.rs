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

//! The `Binding` trait and the checked-cast machinery behind it
//!
//! A binding is a struct holding one [`Handle`] whose runtime type is known
//! to be (a subtype of) one native type. The trait supplies:
//!
//! - `native()`: the typed pointer every forwarding method passes to C,
//!   re-derived through `g_type_check_instance_cast` on each call
//! - `wrap*`: construction from a handle or raw pointer, rejecting NULL
//!   and instances of the wrong type
//! - `cast::<U>()`: a checked conversion to any other binding
//! - `upcast`/`upcast_ref`/`downcast`: conversions along the [`IsA`]
//!   hierarchy, infallible upwards and checked downwards
//!
//! Concrete bindings are declared with the crate-internal `binding!` macro.

use crate::core::handle::Handle;
use crate::error::{BindError, BindResult};
use glib::ffi::GType;
use glib::gobject_ffi::{self, GObject, GTypeInstance};
use log::warn;

/// Re-derives a typed pointer from a generic instance pointer.
///
/// The returned address is identical to `ptr`; the native check only
/// emits a warning when the instance is not of type `gtype`.
///
/// # Safety
///
/// `ptr` must point to a live `GTypeInstance`.
pub unsafe fn cast_instance<T>(ptr: *mut GObject, gtype: GType) -> *mut T {
    // SAFETY: forwarded from the caller.
    unsafe { gobject_ffi::g_type_check_instance_cast(ptr as *mut GTypeInstance, gtype) as *mut T }
}

/// A typed façade over one native object type.
pub trait Binding: Sized {
    /// The C struct this binding forwards to.
    type Native;

    /// Native type name, used in error messages.
    const TYPE_NAME: &'static str;

    /// The registered `GType` (from `gtk_*_get_type`).
    fn static_type() -> GType;

    /// The owning handle.
    fn handle(&self) -> &Handle;

    /// Wraps a handle without checking its runtime type.
    ///
    /// # Safety
    ///
    /// `handle` must point to an instance of `Self::static_type()` or a subtype.
    /// Use [`Binding::wrap`] unless the type is already known.
    ///
    /// Safe code cannot call it:
    ///
    /// ```compile_fail
    /// use gtkwrap::core::{Binding, Handle};
    /// use gtkwrap::widgets::Window;
    ///
    /// let handle = Handle::from_object(&glib::Object::new::<glib::Object>());
    /// let _window = Window::from_handle_unchecked(handle);
    /// ```
    unsafe fn from_handle_unchecked(handle: Handle) -> Self;

    /// Typed pointer for passing to native functions.
    fn native(&self) -> *mut Self::Native {
        // SAFETY: the handle keeps the instance alive and `wrap` checked its type.
        unsafe { cast_instance(self.handle().as_ptr(), Self::static_type()) }
    }

    /// Wraps a handle, checking the runtime type.
    fn wrap(handle: Handle) -> BindResult<Self> {
        if handle.is_a(Self::static_type()) {
            // SAFETY: the runtime type was checked just above.
            Ok(unsafe { Self::from_handle_unchecked(handle) })
        } else {
            let found = handle.type_name();
            warn!("Refusing to wrap {} as {}", found, Self::TYPE_NAME);
            Err(BindError::TypeMismatch {
                expected: Self::TYPE_NAME,
                found,
            })
        }
    }

    /// Wraps a pointer whose reference is transferred to the binding.
    ///
    /// `origin` names the native call for the NULL error.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or a live `GObject` with a reference owned by the caller.
    unsafe fn wrap_full<P>(ptr: *mut P, origin: &'static str) -> BindResult<Self> {
        // SAFETY: forwarded from the caller.
        let handle = unsafe { Handle::from_full(ptr.cast()) }.ok_or(BindError::NullPointer(origin))?;
        Self::wrap(handle)
    }

    /// Wraps a borrowed or floating pointer, taking a reference.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or a live `GObject`.
    unsafe fn wrap_none<P>(ptr: *mut P, origin: &'static str) -> BindResult<Self> {
        // SAFETY: forwarded from the caller.
        let handle = unsafe { Handle::from_none(ptr.cast()) }.ok_or(BindError::NullPointer(origin))?;
        Self::wrap(handle)
    }

    /// Getter variant of [`Binding::wrap_none`]: NULL becomes `None`.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or a live `GObject`.
    unsafe fn wrap_optional_none<P>(ptr: *mut P) -> Option<Self> {
        // SAFETY: forwarded from the caller.
        unsafe { Handle::from_none(ptr.cast()) }.and_then(|h| Self::wrap(h).ok())
    }

    /// Getter variant of [`Binding::wrap_full`]: NULL becomes `None`.
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or a live `GObject` with a reference owned by the caller.
    unsafe fn wrap_optional_full<P>(ptr: *mut P) -> Option<Self> {
        // SAFETY: forwarded from the caller.
        unsafe { Handle::from_full(ptr.cast()) }.and_then(|h| Self::wrap(h).ok())
    }

    /// Checked conversion to another binding sharing this object.
    fn cast<U: Binding>(&self) -> BindResult<U> {
        U::wrap(self.handle().clone())
    }

    /// Returns true if the object is an instance of `U`'s native type.
    fn is<U: Binding>(&self) -> bool {
        self.handle().is_a(U::static_type())
    }

    /// Converts to a gtk-rs object for use with the safe ecosystem.
    fn to_object(&self) -> glib::Object {
        self.handle().to_object()
    }

    /// A new binding of a parent type sharing this object.
    fn upcast<U: Binding>(&self) -> U
    where
        Self: IsA<U>,
    {
        // SAFETY: `IsA<U>` guarantees the object is an instance of `U`.
        unsafe { U::from_handle_unchecked(self.handle().clone()) }
    }

    /// Views this binding as a parent type without touching the reference count.
    fn upcast_ref<U: Binding>(&self) -> &U
    where
        Self: IsA<U>,
    {
        // SAFETY: `IsA` is only implemented between `binding!` structs, which
        // are all `repr(transparent)` over a `Handle`.
        unsafe { &*(self as *const Self).cast::<U>() }
    }

    /// Checked conversion to a subtype.
    fn downcast<U>(&self) -> BindResult<U>
    where
        U: IsA<Self>,
    {
        U::wrap(self.handle().clone())
    }
}

/// Declares that every instance of `Self` is also an instance of `T`.
///
/// # Safety
///
/// `Self::static_type()` must be `T::static_type()` or derive from it, and
/// both types must be declared through `binding!`.
pub unsafe trait IsA<T: Binding>: Binding {}

// SAFETY: every type is an instance of itself.
unsafe impl<T: Binding> IsA<T> for T {}

/// Declares a binding struct over one native type.
///
/// Parent types listed after `extends` get an [`IsA`] impl.
///
/// ```ignore
/// binding!(
///     /// A single-line text field.
///     Entry, ffi::GtkEntry, "GtkEntry", ffi::gtk_entry_get_type,
///     extends Widget
/// );
/// ```
macro_rules! binding {
    ($(#[$meta:meta])* $name:ident, $native:ty, $type_name:literal, $get_type:path $(, extends $($parent:path),+)?) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        #[repr(transparent)]
        pub struct $name {
            handle: $crate::core::Handle,
        }

        impl $crate::core::Binding for $name {
            type Native = $native;
            const TYPE_NAME: &'static str = $type_name;

            fn static_type() -> glib::ffi::GType {
                // SAFETY: type getters have no preconditions.
                unsafe { $get_type() }
            }

            fn handle(&self) -> &$crate::core::Handle {
                &self.handle
            }

            unsafe fn from_handle_unchecked(handle: $crate::core::Handle) -> Self {
                Self { handle }
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.handle).finish()
            }
        }

        $($(
            // SAFETY: the native type derives from the listed parent.
            unsafe impl $crate::core::binding::IsA<$parent> for $name {}
        )+)?
    };
}

pub(crate) use binding;

binding!(
    /// Any `GObject`. Used where the native API returns untyped objects.
    Object,
    GObject,
    "GObject",
    gobject_ffi::g_object_get_type
);
