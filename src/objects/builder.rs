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

//! Loading UI descriptions (`GtkBuilder`)
//!
//! The XML format is passed through to GTK untouched; nothing here parses
//! it. Every `add_*` method returns `Result` built from the native
//! `GError`, and has a `_raw` twin that forwards a caller-owned error slot.
//!
//! # Constructors
//!
//! The native `gtk_builder_new_from_*` functions abort the process on a
//! malformed description. `Builder::from_file` and friends instead create an
//! empty builder and call the matching `add_from_*`, so a bad file is an
//! `Err` rather than a crash.
//!
//! # Example
//!
//! ```no_run
//! use gtkwrap::objects::Builder;
//! use gtkwrap::widgets::Window;
//!
//! gtkwrap::init()?;
//! let builder = Builder::from_file("window.ui")?;
//! if let Some(window) = builder.object_as::<Window>("main_window")? {
//!     println!("loaded {:?}", window);
//! }
//! # Ok::<(), gtkwrap::BindError>(())
//! ```

use crate::core::binding::{binding, Binding, Object};
use crate::core::handle::Borrowed;
use crate::core::translate::{
    from_gboolean, optional_ptr, out_ptr, slist_into_vec, to_cstring, to_optional_cstring, with_gerror,
};
use crate::error::BindResult;
use glib::ffi::GError;
use glib::translate::{from_glib, from_glib_none, IntoGlib, ToGlibPtrMut};
use gtk4::ffi;
use log::debug;
use std::ffi::{c_char, CString};
use std::path::Path;
use std::ptr;

binding!(
    /// Builds object trees from GtkBuilder UI descriptions.
    Builder,
    ffi::GtkBuilder,
    "GtkBuilder",
    ffi::gtk_builder_get_type
);

impl Builder {
    /// An empty builder.
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; returns a new reference.
        unsafe { Self::wrap_full(ffi::gtk_builder_new(), "gtk_builder_new") }
    }

    /// A builder loaded from a UI file.
    pub fn from_file(path: impl AsRef<Path>) -> BindResult<Self> {
        let builder = Self::new()?;
        builder.add_from_file(path)?;
        Ok(builder)
    }

    /// A builder loaded from a `GResource` path.
    pub fn from_resource(resource_path: &str) -> BindResult<Self> {
        let builder = Self::new()?;
        builder.add_from_resource(resource_path)?;
        Ok(builder)
    }

    /// A builder loaded from an in-memory UI description.
    pub fn from_string(ui: &str) -> BindResult<Self> {
        let builder = Self::new()?;
        builder.add_from_string(ui)?;
        Ok(builder)
    }

    /// Parses a UI file and merges its objects into this builder.
    pub fn add_from_file(&self, path: impl AsRef<Path>) -> BindResult<()> {
        let path = path.as_ref();
        let c_path = path_to_cstring(path)?;
        // SAFETY: valid C string; `error` is a valid slot.
        with_gerror(|error| unsafe { ffi::gtk_builder_add_from_file(self.native(), c_path.as_ptr(), error) })?;
        debug!("Loaded UI file {}", path.display());
        Ok(())
    }

    pub fn add_from_file_raw(&self, path: impl AsRef<Path>, error: Option<&mut *mut GError>) -> BindResult<bool> {
        let c_path = path_to_cstring(path.as_ref())?;
        // SAFETY: valid C string; NULL error slot allowed.
        Ok(from_gboolean(unsafe { ffi::gtk_builder_add_from_file(self.native(), c_path.as_ptr(), out_ptr(error)) }))
    }

    pub fn add_from_resource(&self, resource_path: &str) -> BindResult<()> {
        let c_path = to_cstring(resource_path)?;
        // SAFETY: valid C string; `error` is a valid slot.
        with_gerror(|error| unsafe { ffi::gtk_builder_add_from_resource(self.native(), c_path.as_ptr(), error) })?;
        debug!("Loaded UI resource {}", resource_path);
        Ok(())
    }

    pub fn add_from_resource_raw(&self, resource_path: &str, error: Option<&mut *mut GError>) -> BindResult<bool> {
        let c_path = to_cstring(resource_path)?;
        // SAFETY: valid C string; NULL error slot allowed.
        Ok(from_gboolean(unsafe {
            ffi::gtk_builder_add_from_resource(self.native(), c_path.as_ptr(), out_ptr(error))
        }))
    }

    pub fn add_from_string(&self, ui: &str) -> BindResult<()> {
        let c_ui = to_cstring(ui)?;
        // SAFETY: NUL-terminated buffer, so length -1; `error` is a valid slot.
        with_gerror(|error| unsafe { ffi::gtk_builder_add_from_string(self.native(), c_ui.as_ptr(), -1, error) })?;
        Ok(())
    }

    pub fn add_from_string_raw(&self, ui: &str, error: Option<&mut *mut GError>) -> BindResult<bool> {
        let c_ui = to_cstring(ui)?;
        // SAFETY: NUL-terminated buffer; NULL error slot allowed.
        Ok(from_gboolean(unsafe {
            ffi::gtk_builder_add_from_string(self.native(), c_ui.as_ptr(), -1, out_ptr(error))
        }))
    }

    /// Builds only the listed objects (and what they depend on) from `ui`.
    pub fn add_objects_from_string(&self, ui: &str, object_ids: &[&str]) -> BindResult<()> {
        let c_ui = to_cstring(ui)?;
        let c_ids = object_ids.iter().map(|id| to_cstring(id)).collect::<BindResult<Vec<_>>>()?;
        let mut id_ptrs: Vec<*const c_char> = c_ids.iter().map(|id| id.as_ptr()).chain(std::iter::once(ptr::null())).collect();
        // SAFETY: NULL-terminated id array outlives the call; `error` is a valid slot.
        with_gerror(|error| unsafe {
            ffi::gtk_builder_add_objects_from_string(self.native(), c_ui.as_ptr(), -1, id_ptrs.as_mut_ptr(), error)
        })?;
        Ok(())
    }

    /// Looks up an object by its `id`. The builder keeps ownership.
    ///
    /// The builder never releases an object it holds (ids cannot be
    /// reused), so the view stays valid for as long as the builder is borrowed.
    pub fn object(&self, name: &str) -> BindResult<Option<Borrowed<'_, Object>>> {
        let c_name = to_cstring(name)?;
        // SAFETY: transfer none; the object lives as long as the builder holds it.
        Ok(unsafe { Borrowed::new(ffi::gtk_builder_get_object(self.native(), c_name.as_ptr())) })
    }

    /// Looks up an object and takes a typed reference to it.
    ///
    /// `Ok(None)` if no object has that id; `Err(TypeMismatch)` if it is not a `T`.
    pub fn object_as<T: Binding>(&self, name: &str) -> BindResult<Option<T>> {
        self.object(name)?.map(|object| object.upgrade_as::<T>()).transpose()
    }

    /// Every object built so far, in no particular order.
    pub fn objects(&self) -> Vec<Borrowed<'_, Object>> {
        // SAFETY: the list cells are ours, the objects are owned by the builder.
        unsafe {
            slist_into_vec(ffi::gtk_builder_get_objects(self.native()), |data| {
                Borrowed::new(data as *mut glib::gobject_ffi::GObject)
            })
        }
    }

    /// Makes an externally created object available to `ui` under `name`.
    pub fn expose_object<B: Binding>(&self, name: &str, object: &B) -> BindResult<()> {
        let c_name = to_cstring(name)?;
        // SAFETY: the builder takes its own reference.
        unsafe { ffi::gtk_builder_expose_object(self.native(), c_name.as_ptr(), object.handle().as_ptr()) };
        Ok(())
    }

    /// The object signal handlers are bound to, with a reference of its own.
    pub fn current_object(&self) -> Option<Object> {
        // SAFETY: transfer none; wrapping takes a reference before any setter can drop it.
        unsafe { Object::wrap_optional_none(ffi::gtk_builder_get_current_object(self.native())) }
    }

    /// Sets the object signal handlers are bound to. `None` clears it.
    pub fn set_current_object<B: Binding>(&self, object: Option<&B>) {
        let object = object.map_or(ptr::null_mut(), |o| o.handle().as_ptr());
        // SAFETY: NULL is allowed; the builder takes its own reference.
        unsafe { ffi::gtk_builder_set_current_object(self.native(), object) }
    }

    pub fn translation_domain(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the builder; copied before returning.
        unsafe { from_glib_none(ffi::gtk_builder_get_translation_domain(self.native())) }
    }

    /// `None` uses the domain set with `textdomain()`.
    pub fn set_translation_domain(&self, domain: Option<&str>) -> BindResult<()> {
        let c_domain = to_optional_cstring(domain)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_builder_set_translation_domain(self.native(), optional_ptr(&c_domain)) };
        Ok(())
    }

    /// Resolves a type name as a UI file would (`"GtkEntry"`).
    ///
    /// Returns `glib::Type::INVALID` for unknown names.
    pub fn type_from_name(&self, type_name: &str) -> BindResult<glib::Type> {
        let c_name = to_cstring(type_name)?;
        // SAFETY: valid C string.
        Ok(unsafe { from_glib(ffi::gtk_builder_get_type_from_name(self.native(), c_name.as_ptr())) })
    }

    /// Parses `string` the way a `<property>` value would be, into a new value of `value_type`.
    pub fn value_from_string_type(&self, value_type: glib::Type, string: &str) -> BindResult<glib::Value> {
        let c_string = to_cstring(string)?;
        // SAFETY: an uninitialised GValue is what the builder expects to fill.
        let mut value: glib::Value = unsafe { glib::translate::uninitialized() };
        let value_ptr = value.to_glib_none_mut().0;
        // SAFETY: valid C string and value slot; `error` is a valid slot.
        with_gerror(|error| unsafe {
            ffi::gtk_builder_value_from_string_type(
                self.native(),
                value_type.into_glib(),
                c_string.as_ptr(),
                value_ptr,
                error,
            )
        })?;
        Ok(value)
    }
}

/// File names are passed to GTK as the raw OS bytes, so non-UTF-8 paths work.
fn path_to_cstring(path: &Path) -> BindResult<CString> {
    Ok(CString::new(path.as_os_str().as_encoded_bytes())?)
}
