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
use crate::core::translate::{from_gboolean, to_cstring, to_gboolean};
use crate::error::BindResult;
use glib::translate::from_glib_none;
use gtk4::ffi;

binding!(
    /// One visible column of a [`TreeView`](crate::widgets::TreeView).
    TreeViewColumn,
    ffi::GtkTreeViewColumn,
    "GtkTreeViewColumn",
    ffi::gtk_tree_view_column_get_type
);

impl Buildable for TreeViewColumn {}

impl TreeViewColumn {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; the result is floating and sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_tree_view_column_new(), "gtk_tree_view_column_new") }
    }

    pub fn title(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the column; copied before returning.
        unsafe { from_glib_none(ffi::gtk_tree_view_column_get_title(self.native())) }
    }

    pub fn set_title(&self, title: &str) -> BindResult<()> {
        let c_title = to_cstring(title)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_tree_view_column_set_title(self.native(), c_title.as_ptr()) };
        Ok(())
    }

    pub fn is_resizable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_column_get_resizable(self.native()) })
    }

    pub fn set_resizable(&self, resizable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_set_resizable(self.native(), to_gboolean(resizable)) }
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_column_get_visible(self.native()) })
    }

    pub fn set_visible(&self, visible: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_set_visible(self.native(), to_gboolean(visible)) }
    }

    pub fn expands(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_column_get_expand(self.native()) })
    }

    pub fn set_expand(&self, expand: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_set_expand(self.native(), to_gboolean(expand)) }
    }

    pub fn is_clickable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_column_get_clickable(self.native()) })
    }

    pub fn set_clickable(&self, clickable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_set_clickable(self.native(), to_gboolean(clickable)) }
    }

    /// Current allocated width in pixels.
    pub fn width(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_get_width(self.native()) }
    }

    pub fn fixed_width(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_get_fixed_width(self.native()) }
    }

    /// -1 for no sorting.
    pub fn sort_column_id(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_get_sort_column_id(self.native()) }
    }

    pub fn set_sort_column_id(&self, sort_column_id: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_column_set_sort_column_id(self.native(), sort_column_id) }
    }
}
