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

//! Tree and list display over a [`TreeModel`]

use crate::capabilities::{Buildable, Scrollable, TreeModel};
use crate::core::binding::{binding, Binding};
use crate::core::translate::{from_gboolean, out_ptr, to_gboolean};
use crate::error::BindResult;
use crate::objects::{TreePath, TreeViewColumn};
use crate::widgets::widget::Widget;
use gtk4::ffi;
use gtk4::gdk::ffi::GdkRectangle;
use std::ptr;

binding!(
    /// A view showing the rows of a tree model in columns.
    TreeView,
    ffi::GtkTreeView,
    "GtkTreeView",
    ffi::gtk_tree_view_get_type,
    extends Widget
);

impl Scrollable for TreeView {}
impl Buildable for TreeView {}

/// The row and column under a point, from [`TreeView::path_at_pos`].
#[derive(Debug)]
pub struct TreeViewHit {
    pub path: Option<TreePath>,
    pub column: Option<TreeViewColumn>,
    /// Position relative to the cell's top-left corner.
    pub cell_x: i32,
    pub cell_y: i32,
}

impl TreeView {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; the floating result is sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_tree_view_new(), "gtk_tree_view_new") }
    }

    pub fn with_model<M: TreeModel>(model: &M) -> BindResult<Self> {
        // SAFETY: the view takes its own reference to the model.
        unsafe { Self::wrap_none(ffi::gtk_tree_view_new_with_model(model.tree_model_ptr()), "gtk_tree_view_new_with_model") }
    }

    /// The current model, if it is a `M`.
    pub fn model<M: TreeModel>(&self) -> Option<M> {
        // SAFETY: transfer none.
        unsafe { M::wrap_optional_none(ffi::gtk_tree_view_get_model(self.native())) }
    }

    pub fn set_model<M: TreeModel>(&self, model: &M) {
        // SAFETY: the view takes its own reference.
        unsafe { ffi::gtk_tree_view_set_model(self.native(), model.tree_model_ptr()) }
    }

    pub fn unset_model(&self) {
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_tree_view_set_model(self.native(), ptr::null_mut()) }
    }

    /// Appends `column` and returns the new column count.
    pub fn append_column(&self, column: &TreeViewColumn) -> i32 {
        // SAFETY: the view takes its own reference.
        unsafe { ffi::gtk_tree_view_append_column(self.native(), column.native()) }
    }

    /// Inserts at `position` (-1 appends) and returns the new column count.
    pub fn insert_column(&self, column: &TreeViewColumn, position: i32) -> i32 {
        // SAFETY: the view takes its own reference.
        unsafe { ffi::gtk_tree_view_insert_column(self.native(), column.native(), position) }
    }

    pub fn remove_column(&self, column: &TreeViewColumn) -> i32 {
        // SAFETY: `column` must belong to this view, which GTK checks.
        unsafe { ffi::gtk_tree_view_remove_column(self.native(), column.native()) }
    }

    pub fn column(&self, n: i32) -> Option<TreeViewColumn> {
        // SAFETY: transfer none; NULL when out of range.
        unsafe { TreeViewColumn::wrap_optional_none(ffi::gtk_tree_view_get_column(self.native(), n)) }
    }

    pub fn n_columns(&self) -> u32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_get_n_columns(self.native()) }
    }

    pub fn headers_visible(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_headers_visible(self.native()) })
    }

    pub fn set_headers_visible(&self, visible: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_headers_visible(self.native(), to_gboolean(visible)) }
    }

    pub fn headers_clickable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_headers_clickable(self.native()) })
    }

    pub fn set_headers_clickable(&self, clickable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_headers_clickable(self.native(), to_gboolean(clickable)) }
    }

    pub fn is_reorderable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_reorderable(self.native()) })
    }

    pub fn set_reorderable(&self, reorderable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_reorderable(self.native(), to_gboolean(reorderable)) }
    }

    pub fn enable_search(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_enable_search(self.native()) })
    }

    pub fn set_enable_search(&self, enable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_enable_search(self.native(), to_gboolean(enable)) }
    }

    /// The model column used for interactive search, or -1.
    pub fn search_column(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_get_search_column(self.native()) }
    }

    pub fn set_search_column(&self, column: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_search_column(self.native(), column) }
    }

    pub fn level_indentation(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_get_level_indentation(self.native()) }
    }

    pub fn set_level_indentation(&self, indentation: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_level_indentation(self.native(), indentation) }
    }

    pub fn shows_expanders(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_show_expanders(self.native()) })
    }

    pub fn set_show_expanders(&self, enabled: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_show_expanders(self.native(), to_gboolean(enabled)) }
    }

    pub fn rubber_banding(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_rubber_banding(self.native()) })
    }

    pub fn set_rubber_banding(&self, enable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_rubber_banding(self.native(), to_gboolean(enable)) }
    }

    pub fn hover_selection(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_hover_selection(self.native()) })
    }

    pub fn set_hover_selection(&self, hover: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_hover_selection(self.native(), to_gboolean(hover)) }
    }

    pub fn hover_expand(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_hover_expand(self.native()) })
    }

    pub fn set_hover_expand(&self, expand: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_hover_expand(self.native(), to_gboolean(expand)) }
    }

    pub fn activates_on_single_click(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_activate_on_single_click(self.native()) })
    }

    pub fn set_activate_on_single_click(&self, single: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_activate_on_single_click(self.native(), to_gboolean(single)) }
    }

    pub fn enable_tree_lines(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_enable_tree_lines(self.native()) })
    }

    pub fn set_enable_tree_lines(&self, enabled: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_enable_tree_lines(self.native(), to_gboolean(enabled)) }
    }

    pub fn fixed_height_mode(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_fixed_height_mode(self.native()) })
    }

    /// Assumes all rows share one height. Every column must be fixed-size first.
    pub fn set_fixed_height_mode(&self, enable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_fixed_height_mode(self.native(), to_gboolean(enable)) }
    }

    pub fn tooltip_column(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_get_tooltip_column(self.native()) }
    }

    pub fn set_tooltip_column(&self, column: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_tooltip_column(self.native(), column) }
    }

    pub fn grid_lines(&self) -> ffi::GtkTreeViewGridLines {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_get_grid_lines(self.native()) }
    }

    pub fn set_grid_lines(&self, grid_lines: ffi::GtkTreeViewGridLines) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_set_grid_lines(self.native(), grid_lines) }
    }

    pub fn expand_all(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_expand_all(self.native()) }
    }

    pub fn collapse_all(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_collapse_all(self.native()) }
    }

    pub fn columns_autosize(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_tree_view_columns_autosize(self.native()) }
    }

    /// True if the row had children to show.
    pub fn expand_row(&self, path: &TreePath, open_all: bool) -> bool {
        // SAFETY: GTK only reads the path.
        from_gboolean(unsafe { ffi::gtk_tree_view_expand_row(self.native(), path.as_ptr(), to_gboolean(open_all)) })
    }

    pub fn collapse_row(&self, path: &TreePath) -> bool {
        // SAFETY: GTK only reads the path.
        from_gboolean(unsafe { ffi::gtk_tree_view_collapse_row(self.native(), path.as_ptr()) })
    }

    pub fn row_expanded(&self, path: &TreePath) -> bool {
        // SAFETY: GTK only reads the path.
        from_gboolean(unsafe { ffi::gtk_tree_view_row_expanded(self.native(), path.as_ptr()) })
    }

    /// The cursor row and focus column; either may be unset.
    pub fn cursor(&self) -> (Option<TreePath>, Option<TreeViewColumn>) {
        let mut path = ptr::null_mut();
        let mut column = ptr::null_mut();
        // SAFETY: both slots are valid; the path is transfer full, the column transfer none.
        unsafe {
            ffi::gtk_tree_view_get_cursor(self.native(), &mut path, &mut column);
            (TreePath::from_full(path), TreeViewColumn::wrap_optional_none(column))
        }
    }

    /// [`TreeView::cursor`] writing into caller slots; absent slots are skipped.
    ///
    /// A path written to `path` is owned by the caller (`gtk_tree_path_free`).
    /// The column is not referenced.
    pub fn cursor_raw(&self, path: Option<&mut *mut ffi::GtkTreePath>, column: Option<&mut *mut ffi::GtkTreeViewColumn>) {
        // SAFETY: NULL out slots are allowed.
        unsafe { ffi::gtk_tree_view_get_cursor(self.native(), out_ptr(path), out_ptr(column)) }
    }

    /// Moves the cursor to `path`, optionally focusing `column` and starting to edit it.
    pub fn set_cursor(&self, path: &TreePath, column: Option<&TreeViewColumn>, start_editing: bool) {
        let column = column.map_or(ptr::null_mut(), |c| c.native());
        // SAFETY: GTK only reads the path; NULL column is allowed.
        unsafe { ffi::gtk_tree_view_set_cursor(self.native(), path.as_ptr(), column, to_gboolean(start_editing)) }
    }

    /// The row under bin-window coordinates `(x, y)`, or `None` over empty space.
    pub fn path_at_pos(&self, x: i32, y: i32) -> Option<TreeViewHit> {
        let mut path = ptr::null_mut();
        let mut column = ptr::null_mut();
        let mut cell_x = 0;
        let mut cell_y = 0;
        // SAFETY: all slots are valid; path is transfer full, column transfer none.
        unsafe {
            let found = from_gboolean(ffi::gtk_tree_view_get_path_at_pos(
                self.native(),
                x,
                y,
                &mut path,
                &mut column,
                &mut cell_x,
                &mut cell_y,
            ));
            let path = TreePath::from_full(path);
            let column = TreeViewColumn::wrap_optional_none(column);
            found.then_some(TreeViewHit {
                path,
                column,
                cell_x,
                cell_y,
            })
        }
    }

    /// [`TreeView::path_at_pos`] writing into caller slots. Returns whether a row was hit.
    ///
    /// Ownership of the outputs is as for [`TreeView::cursor_raw`].
    pub fn path_at_pos_raw(
        &self,
        x: i32,
        y: i32,
        path: Option<&mut *mut ffi::GtkTreePath>,
        column: Option<&mut *mut ffi::GtkTreeViewColumn>,
        cell_x: Option<&mut i32>,
        cell_y: Option<&mut i32>,
    ) -> bool {
        // SAFETY: NULL out slots are allowed.
        from_gboolean(unsafe {
            ffi::gtk_tree_view_get_path_at_pos(
                self.native(),
                x,
                y,
                out_ptr(path),
                out_ptr(column),
                out_ptr(cell_x),
                out_ptr(cell_y),
            )
        })
    }

    /// First and last visible rows, or `None` when nothing is shown.
    pub fn visible_range(&self) -> Option<(TreePath, TreePath)> {
        let mut start = ptr::null_mut();
        let mut end = ptr::null_mut();
        // SAFETY: both paths are transfer full when set.
        unsafe {
            let found = from_gboolean(ffi::gtk_tree_view_get_visible_range(self.native(), &mut start, &mut end));
            let start = TreePath::from_full(start);
            let end = TreePath::from_full(end);
            if found {
                start.zip(end)
            } else {
                None
            }
        }
    }

    /// [`TreeView::visible_range`] writing into caller slots. Returns whether any row is shown.
    ///
    /// Paths written to the slots are owned by the caller (`gtk_tree_path_free`).
    pub fn visible_range_raw(&self, start: Option<&mut *mut ffi::GtkTreePath>, end: Option<&mut *mut ffi::GtkTreePath>) -> bool {
        // SAFETY: NULL out slots are allowed.
        from_gboolean(unsafe { ffi::gtk_tree_view_get_visible_range(self.native(), out_ptr(start), out_ptr(end)) })
    }

    /// The visible region in tree coordinates.
    pub fn visible_rect(&self, rect: &mut GdkRectangle) {
        // SAFETY: `rect` is a valid out slot.
        unsafe { ffi::gtk_tree_view_get_visible_rect(self.native(), rect) }
    }

    pub fn convert_widget_to_bin_window_coords(&self, wx: i32, wy: i32, bx: Option<&mut i32>, by: Option<&mut i32>) {
        // SAFETY: NULL out slots are allowed.
        unsafe { ffi::gtk_tree_view_convert_widget_to_bin_window_coords(self.native(), wx, wy, out_ptr(bx), out_ptr(by)) }
    }
}
