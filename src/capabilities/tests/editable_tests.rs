use crate::capabilities::{Buildable, CellEditable, Editable};
use crate::core::SignalExt;
use crate::test_support::with_gtk;
use crate::widgets::Entry;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_text_round_trip() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        entry.set_text("héllo").unwrap();

        assert_eq!(entry.text().unwrap().as_str(), "héllo");
        assert_eq!(entry.chars(1, 3).unwrap().to_str().unwrap(), "él");
        assert_eq!(entry.chars(0, -1).unwrap().to_str().unwrap(), "héllo");
    });
}

#[test]
fn test_insert_advances_position() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        entry.set_text("ac").unwrap();

        let mut position = 1;
        entry.insert_text("b", &mut position).unwrap();

        assert_eq!(position, 2);
        assert_eq!(entry.text().unwrap().as_str(), "abc");
    });
}

#[test]
fn test_delete_text_range() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        entry.set_text("keep-drop").unwrap();
        entry.delete_text(4, -1);
        assert_eq!(entry.text().unwrap().as_str(), "keep");
    });
}

#[test]
fn test_selection_bounds_without_out_params() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        entry.set_text("select me").unwrap();
        assert!(!entry.selection_bounds(None, None));

        entry.select_region(0, 6);
        assert!(entry.selection_bounds(None, None));

        let mut start = -1;
        let mut end = -1;
        assert!(entry.selection_bounds(Some(&mut start), Some(&mut end)));
        assert_eq!((start, end), (0, 6));

        entry.delete_selection();
        assert_eq!(entry.text().unwrap().as_str(), " me");
    });
}

#[test]
fn test_editable_flags() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        assert!(entry.is_editable());

        entry.set_editable(false);
        entry.set_width_chars(12);
        entry.set_max_width_chars(20);
        entry.set_alignment(1.0);

        assert!(!entry.is_editable());
        assert_eq!(entry.width_chars(), 12);
        assert_eq!(entry.max_width_chars(), 20);
        assert_eq!(entry.alignment(), 1.0);
    });
}

#[test]
fn test_editing_done_emits_signal() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        let done = Rc::new(Cell::new(false));

        let flag = done.clone();
        entry.connect_signal("editing-done", move |_| flag.set(true)).unwrap();
        entry.editing_done();

        assert!(done.get());
    });
}

#[test]
fn test_code_built_widget_has_no_buildable_id() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        assert!(entry.buildable_id().is_none());
    });
}
