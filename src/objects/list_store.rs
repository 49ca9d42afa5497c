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

use crate::capabilities::tree_model::{adopt, resolve};
use crate::capabilities::{Buildable, TreeIter, TreeModel};
use crate::core::binding::{binding, Binding};
use crate::core::value::TypeWrapper;
use crate::error::{BindError, BindResult};
use glib::translate::{IntoGlib, ToGlibPtr};
use gtk4::ffi;
use std::ffi::c_int;
use std::mem::MaybeUninit;

binding!(
    /// A flat list model with typed columns.
    ListStore,
    ffi::GtkListStore,
    "GtkListStore",
    ffi::gtk_list_store_get_type
);

impl TreeModel for ListStore {}
impl Buildable for ListStore {}

impl ListStore {
    /// Creates a store with one column per entry of `column_types`.
    pub fn new(column_types: &[glib::Type]) -> BindResult<Self> {
        let mut types: Vec<glib::ffi::GType> = column_types.iter().map(|t| t.into_glib()).collect();
        let n_columns = c_int::try_from(types.len()).unwrap_or(c_int::MAX);
        // SAFETY: `types` holds `n_columns` entries; returns a new reference.
        unsafe { Self::wrap_full(ffi::gtk_list_store_newv(n_columns, types.as_mut_ptr()), "gtk_list_store_newv") }
    }

    fn added(&self, add: unsafe extern "C" fn(*mut ffi::GtkListStore, *mut ffi::GtkTreeIter)) -> BindResult<TreeIter> {
        let mut raw = MaybeUninit::<ffi::GtkTreeIter>::zeroed();
        // SAFETY: `add` always fills the out slot with the new row.
        unsafe {
            add(self.native(), raw.as_mut_ptr());
            adopt(self, raw.assume_init_mut()).ok_or(BindError::NullPointer("gtk_tree_model_get_path"))
        }
    }

    /// Appends an empty row.
    pub fn append(&self) -> BindResult<TreeIter> {
        self.added(ffi::gtk_list_store_append)
    }

    pub fn prepend(&self) -> BindResult<TreeIter> {
        self.added(ffi::gtk_list_store_prepend)
    }

    /// Removes the row. True if another row now sits at the same position;
    /// false if there is none or the row was already gone.
    pub fn remove(&self, iter: &TreeIter) -> bool {
        let Some(mut raw) = resolve(self, iter) else {
            return false;
        };
        // SAFETY: `raw` was just resolved by this store.
        unsafe { ffi::gtk_list_store_remove(self.native(), &mut raw) != glib::ffi::GFALSE }
    }

    /// Stores a boxed value. Fails if the wrapper holds no value or the row is gone.
    pub fn set_value(&self, iter: &TreeIter, column: i32, value: &TypeWrapper<'_>) -> BindResult<()> {
        let value = value.as_gvalue_ptr()?;
        let mut raw = resolve(self, iter).ok_or(BindError::InvalidIter("GtkTreeModel"))?;
        // SAFETY: the store copies the value.
        unsafe { ffi::gtk_list_store_set_value(self.native(), &mut raw, column, value) };
        Ok(())
    }

    /// Stores a copy of `value`. Fails if the row is gone.
    pub fn set(&self, iter: &TreeIter, column: i32, value: &glib::Value) -> BindResult<()> {
        let mut raw = resolve(self, iter).ok_or(BindError::InvalidIter("GtkTreeModel"))?;
        // SAFETY: the store copies the value and never writes through the pointer.
        unsafe {
            ffi::gtk_list_store_set_value(
                self.native(),
                &mut raw,
                column,
                ToGlibPtr::<*const glib::gobject_ffi::GValue>::to_glib_none(value).0 as *mut _,
            )
        };
        Ok(())
    }

    pub fn clear(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_list_store_clear(self.native()) }
    }
}
