use crate::error::BindError;
use crate::objects::{EntryBuffer, TextBuffer, TextTagTable};
use crate::test_support::with_gtk;

// ============================================================================
// TextBuffer
// ============================================================================

#[test]
fn test_text_buffer_set_and_read() {
    with_gtk(|| {
        let buffer = TextBuffer::new(None).unwrap();
        buffer.set_text("first line\nsecond line").unwrap();

        assert_eq!(buffer.full_text().unwrap().to_str().unwrap(), "first line\nsecond line");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.char_count(), 22);
    });
}

#[test]
fn test_text_buffer_slices_between_iters() {
    with_gtk(|| {
        let buffer = TextBuffer::new(None).unwrap();
        buffer.set_text("hello world").unwrap();

        let start = buffer.iter_at_offset(6);
        let end = buffer.end_iter();
        assert_eq!(start.offset(), 6);
        assert!(end.is_end());

        assert_eq!(buffer.text(&start, &end, false).unwrap().to_str().unwrap(), "world");
        assert_eq!(buffer.slice(&start, &end, true).unwrap().to_str().unwrap(), "world");
    });
}

#[test]
fn test_text_buffer_insert_and_delete() {
    with_gtk(|| {
        let buffer = TextBuffer::new(None).unwrap();
        buffer.set_text("ac").unwrap();

        let mut iter = buffer.iter_at_offset(1);
        buffer.insert(&mut iter, "b").unwrap();
        assert_eq!(buffer.full_text().unwrap().to_str().unwrap(), "abc");
        assert_eq!(iter.offset(), 2, "iter should move past the inserted text");

        let (mut start, mut end) = buffer.bounds();
        buffer.delete(&mut start, &mut end).unwrap();
        assert_eq!(buffer.char_count(), 0);
    });
}

#[test]
fn test_text_buffer_modified_flag() {
    with_gtk(|| {
        let buffer = TextBuffer::new(None).unwrap();
        assert!(!buffer.is_modified());

        buffer.insert_at_cursor("x").unwrap();
        assert!(buffer.is_modified());

        buffer.set_modified(false);
        assert!(!buffer.is_modified());
    });
}

#[test]
fn test_iter_at_missing_line_is_none() {
    with_gtk(|| {
        let buffer = TextBuffer::new(None).unwrap();
        buffer.set_text("only one line").unwrap();

        assert!(buffer.iter_at_line(0).unwrap().is_start());
        assert!(buffer.iter_at_line(5).is_none());
    });
}

#[test]
fn test_foreign_iter_is_rejected() {
    with_gtk(|| {
        let first = TextBuffer::new(None).unwrap();
        let second = TextBuffer::new(None).unwrap();
        first.set_text("first buffer").unwrap();
        second.set_text("second").unwrap();

        let mut foreign = first.iter_at_offset(6);
        assert!(first.owns(&foreign));
        assert!(!second.owns(&foreign));

        assert!(second.text(&foreign, &second.end_iter(), false).is_none());
        assert!(matches!(second.insert(&mut foreign, "x"), Err(BindError::InvalidIter(_))));
        let (mut start, mut end) = second.bounds();
        assert!(matches!(second.delete(&mut start, &mut foreign), Err(BindError::InvalidIter(_))));
        assert!(matches!(second.delete(&mut foreign, &mut end), Err(BindError::InvalidIter(_))));

        assert_eq!(first.full_text().unwrap().to_str().unwrap(), "first buffer");
        assert_eq!(second.full_text().unwrap().to_str().unwrap(), "second");
    });
}

#[test]
fn test_iter_keeps_its_buffer_alive() {
    with_gtk(|| {
        let iter = {
            let buffer = TextBuffer::new(None).unwrap();
            buffer.set_text("short lived").unwrap();
            buffer.end_iter()
        };

        assert_eq!(iter.offset(), 11);
        assert_eq!(iter.buffer().full_text().unwrap().to_str().unwrap(), "short lived");
    });
}

#[test]
fn test_shared_tag_table() {
    with_gtk(|| {
        let table = TextTagTable::new().unwrap();
        let first = TextBuffer::new(Some(&table)).unwrap();
        let second = TextBuffer::new(Some(&table)).unwrap();

        assert_eq!(first.tag_table().unwrap(), table);
        assert_eq!(second.tag_table().unwrap(), table);
        assert_eq!(table.size(), 0);
    });
}

#[test]
fn test_text_with_nul_is_rejected() {
    with_gtk(|| {
        let buffer = TextBuffer::new(None).unwrap();
        assert!(buffer.set_text("a\0b").is_err());
        assert_eq!(buffer.char_count(), 0, "buffer should be untouched");
    });
}

// ============================================================================
// EntryBuffer
// ============================================================================

#[test]
fn test_entry_buffer_initial_text() {
    with_gtk(|| {
        let empty = EntryBuffer::new(None).unwrap();
        assert_eq!(empty.length(), 0);

        let buffer = EntryBuffer::new(Some("grüß")).unwrap();
        assert_eq!(buffer.text().unwrap().as_str(), "grüß");
        assert_eq!(buffer.length(), 4);
        assert_eq!(buffer.bytes(), "grüß".len());
    });
}

#[test]
fn test_entry_buffer_max_length_truncates() {
    with_gtk(|| {
        let buffer = EntryBuffer::new(None).unwrap();
        buffer.set_max_length(3);
        buffer.set_text("abcdef").unwrap();

        assert_eq!(buffer.max_length(), 3);
        assert_eq!(buffer.text().unwrap().as_str(), "abc");
    });
}

#[test]
fn test_entry_buffer_text_outlives_growth() {
    with_gtk(|| {
        let buffer = EntryBuffer::new(Some("a")).unwrap();
        let before = buffer.text().unwrap();

        // Growing past the inline storage makes GTK free the old text.
        let long = "x".repeat(4096);
        buffer.set_text(&long).unwrap();

        assert_eq!(before, "a");
        assert_eq!(buffer.text().unwrap().as_str(), long);
    });
}
