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

use crate::core::binding::{cast_instance, Binding};
use crate::core::handle::Handle;
use crate::core::translate::from_gboolean;
use crate::objects::TreePath;
use glib::translate::{from_glib, uninitialized, ToGlibPtrMut};
use gtk4::ffi;
use std::ptr;

/// A row of a [`TreeModel`].
///
/// Holds the row's path and a reference to its model rather than a native
/// `GtkTreeIter`: every use resolves the path again, so a row that has since
/// been removed is reported as missing instead of being followed through a
/// dangling pointer. Only models create these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeIter {
    model: Handle,
    path: TreePath,
}

impl TreeIter {
    /// The row's position when the iterator was created or last moved.
    pub fn path(&self) -> &TreePath {
        &self.path
    }
}

fn blank_iter() -> ffi::GtkTreeIter {
    ffi::GtkTreeIter {
        stamp: 0,
        user_data: ptr::null_mut(),
        user_data2: ptr::null_mut(),
        user_data3: ptr::null_mut(),
    }
}

/// Turns a native iterator the model just filled into a [`TreeIter`].
///
/// # Safety
///
/// `raw` must have been set by `model` and not invalidated since.
pub(crate) unsafe fn adopt<M: TreeModel + ?Sized>(model: &M, raw: &mut ffi::GtkTreeIter) -> Option<TreeIter> {
    // SAFETY: forwarded from the caller; transfer full path.
    let path = unsafe { TreePath::from_full(ffi::gtk_tree_model_get_path(model.tree_model_ptr(), raw)) }?;
    Some(TreeIter {
        model: model.handle().clone(),
        path,
    })
}

/// A fresh native iterator for `iter`'s row, if it belongs to `model` and still exists.
pub(crate) fn resolve<M: TreeModel + ?Sized>(model: &M, iter: &TreeIter) -> Option<ffi::GtkTreeIter> {
    if iter.model != *model.handle() {
        return None;
    }
    let mut raw = blank_iter();
    // SAFETY: owned path and a valid out slot; GTK bounds-checks the path.
    let found = unsafe { ffi::gtk_tree_model_get_iter(model.tree_model_ptr(), &mut raw, iter.path.as_ptr()) };
    from_gboolean(found).then_some(raw)
}

/// Row/column data models consumed by tree views.
pub trait TreeModel: Binding {
    /// Interface pointer for this object.
    fn tree_model_ptr(&self) -> *mut ffi::GtkTreeModel {
        // SAFETY: live handle; the cast only re-types the pointer.
        unsafe { cast_instance(self.handle().as_ptr(), ffi::gtk_tree_model_get_type()) }
    }

    fn n_columns(&self) -> i32 {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_tree_model_get_n_columns(self.tree_model_ptr()) }
    }

    fn column_type(&self, index: i32) -> glib::Type {
        // SAFETY: GTK returns G_TYPE_INVALID for out-of-range columns.
        unsafe { from_glib(ffi::gtk_tree_model_get_column_type(self.tree_model_ptr(), index)) }
    }

    /// The row at `path`, if it exists.
    fn iter(&self, path: &TreePath) -> Option<TreeIter> {
        let mut raw = blank_iter();
        // SAFETY: owned path and a valid out slot.
        let found = unsafe { ffi::gtk_tree_model_get_iter(self.tree_model_ptr(), &mut raw, path.as_ptr()) };
        from_gboolean(found).then(|| TreeIter {
            model: self.handle().clone(),
            path: path.clone(),
        })
    }

    /// The first row. `None` for an empty model.
    fn iter_first(&self) -> Option<TreeIter> {
        let mut raw = blank_iter();
        // SAFETY: `raw` is a valid out slot and is only adopted when set.
        unsafe {
            if !from_gboolean(ffi::gtk_tree_model_get_iter_first(self.tree_model_ptr(), &mut raw)) {
                return None;
            }
            adopt(self, &mut raw)
        }
    }

    /// Advances `iter` to the next sibling row.
    ///
    /// False (with `iter` unchanged) at the last row, or when the row is gone.
    fn iter_next(&self, iter: &mut TreeIter) -> bool {
        let Some(mut raw) = resolve(self, iter) else {
            return false;
        };
        // SAFETY: `raw` was just resolved by this model.
        unsafe {
            if !from_gboolean(ffi::gtk_tree_model_iter_next(self.tree_model_ptr(), &mut raw)) {
                return false;
            }
            match adopt(self, &mut raw) {
                Some(next) => {
                    *iter = next;
                    true
                }
                None => false,
            }
        }
    }

    /// Number of children of `parent`, or of the root when `None`.
    ///
    /// 0 for a parent that is gone or belongs to another model.
    fn iter_n_children(&self, parent: Option<&TreeIter>) -> i32 {
        match parent {
            // SAFETY: NULL means the root.
            None => unsafe { ffi::gtk_tree_model_iter_n_children(self.tree_model_ptr(), ptr::null_mut()) },
            Some(parent) => match resolve(self, parent) {
                // SAFETY: `raw` was just resolved by this model.
                Some(mut raw) => unsafe { ffi::gtk_tree_model_iter_n_children(self.tree_model_ptr(), &mut raw) },
                None => 0,
            },
        }
    }

    /// The row's current path, or `None` if it is gone.
    fn path(&self, iter: &TreeIter) -> Option<TreePath> {
        resolve(self, iter).map(|_| iter.path.clone())
    }

    /// Copies the value stored at `column` of the row.
    ///
    /// `None` for an out-of-range column or a row that is gone.
    fn value(&self, iter: &TreeIter, column: i32) -> Option<glib::Value> {
        if !(0..self.n_columns()).contains(&column) {
            return None;
        }
        let mut raw = resolve(self, iter)?;
        // SAFETY: an uninitialised GValue is what get_value expects to fill;
        // `raw` was just resolved by this model.
        unsafe {
            let mut value: glib::Value = uninitialized();
            ffi::gtk_tree_model_get_value(self.tree_model_ptr(), &mut raw, column, value.to_glib_none_mut().0);
            Some(value)
        }
    }
}
