use crate::capabilities::TreeModel;
use crate::core::Binding;
use crate::objects::{ListStore, TextBuffer, TreePath, TreeViewColumn};
use crate::test_support::with_gtk;
use crate::widgets::{TextView, TreeView};
use glib::prelude::*;
use gtk4::ffi;
use std::ptr;

/// Helper to create a one-column store with `rows` string rows
fn store_with_rows(rows: &[&str]) -> ListStore {
    let store = ListStore::new(&[glib::Type::STRING]).unwrap();
    for row in rows {
        let iter = store.append().unwrap();
        store.set(&iter, 0, &row.to_value()).unwrap();
    }
    store
}

// ============================================================================
// TextView
// ============================================================================

#[test]
fn test_text_view_buffer() {
    with_gtk(|| {
        let buffer = TextBuffer::new(None).unwrap();
        buffer.set_text("let total = price * quantity;").unwrap();

        let view = TextView::with_buffer(&buffer).unwrap();
        assert_eq!(view.buffer().unwrap(), buffer);

        let other = TextBuffer::new(None).unwrap();
        view.set_buffer(&other);
        assert_eq!(view.buffer().unwrap(), other);
    });
}

#[test]
fn test_text_view_creates_its_own_buffer() {
    with_gtk(|| {
        let view = TextView::new().unwrap();
        let buffer = view.buffer().unwrap();
        assert_eq!(buffer.char_count(), 0);
    });
}

#[test]
fn test_text_view_flags() {
    with_gtk(|| {
        let view = TextView::new().unwrap();

        for value in [false, true] {
            view.set_editable(value);
            view.set_cursor_visible(value);
            view.set_accepts_tab(value);
            view.set_monospace(value);
            view.set_overwrite(value);

            assert_eq!(view.is_editable(), value);
            assert_eq!(view.is_cursor_visible(), value);
            assert_eq!(view.accepts_tab(), value);
            assert_eq!(view.is_monospace(), value);
            assert_eq!(view.overwrite(), value);
        }
    });
}

#[test]
fn test_text_view_layout_properties() {
    with_gtk(|| {
        let view = TextView::new().unwrap();
        view.set_left_margin(12);
        view.set_right_margin(6);
        view.set_top_margin(3);
        view.set_bottom_margin(9);
        view.set_indent(-4);
        view.set_pixels_above_lines(1);
        view.set_pixels_below_lines(2);
        view.set_pixels_inside_wrap(5);
        view.set_wrap_mode(ffi::GTK_WRAP_WORD_CHAR);
        view.set_justification(ffi::GTK_JUSTIFY_RIGHT);

        assert_eq!((view.left_margin(), view.right_margin()), (12, 6));
        assert_eq!((view.top_margin(), view.bottom_margin()), (3, 9));
        assert_eq!(view.indent(), -4);
        assert_eq!(
            (view.pixels_above_lines(), view.pixels_below_lines(), view.pixels_inside_wrap()),
            (1, 2, 5)
        );
        assert_eq!(view.wrap_mode(), ffi::GTK_WRAP_WORD_CHAR);
        assert_eq!(view.justification(), ffi::GTK_JUSTIFY_RIGHT);
    });
}

#[test]
fn test_text_view_input_hints() {
    with_gtk(|| {
        let view = TextView::new().unwrap();
        view.set_input_purpose(ffi::GTK_INPUT_PURPOSE_URL);
        view.set_input_hints(ffi::GTK_INPUT_HINT_NO_SPELLCHECK);

        assert_eq!(view.input_purpose(), ffi::GTK_INPUT_PURPOSE_URL);
        assert_eq!(view.input_hints(), ffi::GTK_INPUT_HINT_NO_SPELLCHECK);
    });
}

#[test]
fn test_text_view_iters_follow_buffer() {
    with_gtk(|| {
        let view = TextView::new().unwrap();
        let buffer = view.buffer().unwrap();
        buffer.set_text("one\ntwo").unwrap();

        let iter = buffer.iter_at_line(1).unwrap();
        let end = buffer.end_iter();
        assert_eq!(buffer.text(&iter, &end, false).unwrap().to_str().unwrap(), "two");

        view.reset_cursor_blink();
        view.reset_im_context();
    });
}

#[test]
fn test_text_view_ignores_iters_from_other_buffers() {
    with_gtk(|| {
        let view = TextView::new().unwrap();
        view.buffer().unwrap().set_text("shown\ntext").unwrap();
        let other = TextBuffer::new(None).unwrap();
        other.set_text("elsewhere").unwrap();

        let mut foreign = other.iter_at_offset(4);
        assert!(!view.forward_display_line(&mut foreign));
        assert!(!view.move_visually(&mut foreign, 1));
        assert!(!view.starts_display_line(&foreign));
        assert!(!view.scroll_to_iter(&mut foreign, 0.0, None));
        assert_eq!(foreign.offset(), 4, "foreign iter should not move");

        let mut y = -1;
        view.line_yrange(&foreign, Some(&mut y), None);
        assert_eq!(y, -1);

        let (own, _) = view.iter_at_location(0, 0).unwrap();
        assert!(view.buffer().unwrap().owns(&own));
    });
}

// ============================================================================
// TreeView
// ============================================================================

#[test]
fn test_tree_view_model() {
    with_gtk(|| {
        let store = store_with_rows(&["alpha", "beta"]);
        let view = TreeView::with_model(&store).unwrap();

        assert_eq!(view.model::<ListStore>().unwrap(), store);

        view.unset_model();
        assert!(view.model::<ListStore>().is_none());

        view.set_model(&store);
        assert_eq!(view.model::<ListStore>().unwrap().iter_n_children(None), 2);
    });
}

#[test]
fn test_tree_view_columns() {
    with_gtk(|| {
        let view = TreeView::new().unwrap();
        let name = TreeViewColumn::new().unwrap();
        name.set_title("Name").unwrap();
        let size = TreeViewColumn::new().unwrap();

        assert_eq!(view.append_column(&name), 1);
        assert_eq!(view.insert_column(&size, 0), 2);
        assert_eq!(view.n_columns(), 2);
        assert_eq!(view.column(0).unwrap(), size);
        assert_eq!(view.column(1).unwrap(), name);
        assert!(view.column(5).is_none());

        assert_eq!(view.remove_column(&size), 1);
        assert_eq!(view.column(0).unwrap().title().unwrap().as_str(), "Name");
    });
}

#[test]
fn test_tree_view_flags() {
    with_gtk(|| {
        let view = TreeView::new().unwrap();

        for value in [false, true] {
            view.set_headers_visible(value);
            view.set_reorderable(value);
            view.set_enable_search(value);
            view.set_show_expanders(value);
            view.set_rubber_banding(value);
            view.set_hover_selection(value);
            view.set_hover_expand(value);
            view.set_activate_on_single_click(value);
            view.set_enable_tree_lines(value);

            assert_eq!(view.headers_visible(), value);
            assert_eq!(view.is_reorderable(), value);
            assert_eq!(view.enable_search(), value);
            assert_eq!(view.shows_expanders(), value);
            assert_eq!(view.rubber_banding(), value);
            assert_eq!(view.hover_selection(), value);
            assert_eq!(view.hover_expand(), value);
            assert_eq!(view.activates_on_single_click(), value);
            assert_eq!(view.enable_tree_lines(), value);
        }

        view.set_search_column(0);
        view.set_level_indentation(16);
        view.set_tooltip_column(-1);
        view.set_grid_lines(ffi::GTK_TREE_VIEW_GRID_LINES_BOTH);
        assert_eq!(view.search_column(), 0);
        assert_eq!(view.level_indentation(), 16);
        assert_eq!(view.tooltip_column(), -1);
        assert_eq!(view.grid_lines(), ffi::GTK_TREE_VIEW_GRID_LINES_BOTH);
    });
}

#[test]
fn test_tree_view_cursor() {
    with_gtk(|| {
        let store = store_with_rows(&["alpha", "beta", "gamma"]);
        let view = TreeView::with_model(&store).unwrap();
        let column = TreeViewColumn::new().unwrap();
        view.append_column(&column);

        let target = TreePath::from_string("2").unwrap();
        view.set_cursor(&target, Some(&column), false);

        let (path, focus_column) = view.cursor();
        assert_eq!(path.unwrap(), target);
        assert_eq!(focus_column.unwrap(), column);
    });
}

#[test]
fn test_tree_view_empty_queries() {
    with_gtk(|| {
        let view = TreeView::new().unwrap();

        let (path, column) = view.cursor();
        assert!(path.is_none());
        assert!(column.is_none());
        assert!(view.path_at_pos(5, 5).is_none());
        assert!(view.visible_range().is_none());
    });
}

#[test]
fn test_tree_view_cursor_into_caller_slots() {
    with_gtk(|| {
        let store = store_with_rows(&["alpha", "beta"]);
        let view = TreeView::with_model(&store).unwrap();
        let column = TreeViewColumn::new().unwrap();
        view.append_column(&column);
        view.set_cursor(&TreePath::from_string("1").unwrap(), Some(&column), false);

        let mut path = ptr::null_mut();
        let mut focus_column = ptr::null_mut();
        view.cursor_raw(Some(&mut path), Some(&mut focus_column));
        assert_eq!(focus_column, column.native());
        // The caller owns the written path.
        let path = unsafe { TreePath::from_full(path) }.unwrap();
        assert_eq!(path.indices(), vec![1]);

        // Only the requested slot is written.
        let mut column_only = ptr::null_mut();
        view.cursor_raw(None, Some(&mut column_only));
        assert_eq!(column_only, column.native());
    });
}

#[test]
fn test_tree_view_raw_queries_on_empty_view() {
    with_gtk(|| {
        let view = TreeView::new().unwrap();

        let mut path = ptr::null_mut();
        let mut column = ptr::null_mut();
        view.cursor_raw(Some(&mut path), Some(&mut column));
        assert!(path.is_null());
        assert!(column.is_null());

        let mut hit_path = ptr::null_mut();
        let mut cell_x = 0;
        assert!(!view.path_at_pos_raw(5, 5, Some(&mut hit_path), None, Some(&mut cell_x), None));
        assert!(hit_path.is_null());

        let mut start = ptr::null_mut();
        let mut end = ptr::null_mut();
        assert!(!view.visible_range_raw(Some(&mut start), Some(&mut end)));
        assert!(start.is_null());
        assert!(end.is_null());
        assert!(!view.visible_range_raw(None, None));
    });
}

#[test]
fn test_flat_rows_do_not_expand() {
    with_gtk(|| {
        let store = store_with_rows(&["only"]);
        let view = TreeView::with_model(&store).unwrap();
        let path = TreePath::first().unwrap();

        assert!(!view.expand_row(&path, false));
        assert!(!view.row_expanded(&path));
        view.expand_all();
        view.collapse_all();
        assert!(!view.row_expanded(&path));
    });
}
