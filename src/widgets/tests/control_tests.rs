use crate::capabilities::Editable;
use crate::core::{Binding, SignalExt};
use crate::objects::EntryBuffer;
use crate::test_support::with_gtk;
use crate::widgets::{Button, Entry, Label, Switch, WidgetExt};
use gtk4::ffi;
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Entry
// ============================================================================

#[test]
fn test_entry_shares_buffer() {
    with_gtk(|| {
        let buffer = EntryBuffer::new(Some("shared")).unwrap();
        let first = Entry::with_buffer(&buffer).unwrap();
        let second = Entry::new().unwrap();
        second.set_buffer(&buffer);

        assert_eq!(first.buffer().unwrap(), buffer);
        assert_eq!(second.text().unwrap().as_str(), "shared");

        first.set_text("edited").unwrap();
        assert_eq!(second.text().unwrap().as_str(), "edited");
        assert_eq!(first.text_length(), 6);
    });
}

#[test]
fn test_entry_placeholder_can_be_cleared() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();

        entry.set_placeholder_text(Some("Search files")).unwrap();
        assert_eq!(entry.placeholder_text().unwrap().as_str(), "Search files");

        entry.set_placeholder_text(None).unwrap();
        assert!(entry.placeholder_text().is_none());
    });
}

#[test]
fn test_entry_max_length_and_flags() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        entry.set_max_length(4);
        entry.set_text("abcdefgh").unwrap();
        assert_eq!(entry.max_length(), 4);
        assert_eq!(entry.text().unwrap().as_str(), "abcd");

        for value in [true, false] {
            entry.set_activates_default(value);
            entry.set_has_frame(value);
            entry.set_overwrite_mode(value);
            assert_eq!(entry.activates_default(), value);
            assert_eq!(entry.has_frame(), value);
            assert_eq!(entry.overwrite_mode(), value);
        }
    });
}

#[test]
fn test_entry_password_mode() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        entry.set_visibility(false);
        entry.set_invisible_char('*');
        entry.set_input_purpose(ffi::GTK_INPUT_PURPOSE_PASSWORD);

        assert!(!entry.visibility());
        assert_eq!(entry.invisible_char(), Some('*'));
        assert_eq!(entry.input_purpose(), ffi::GTK_INPUT_PURPOSE_PASSWORD);

        entry.unset_invisible_char();
        assert!(entry.invisible_char().is_some(), "GTK falls back to its default character");
    });
}

#[test]
fn test_entry_progress() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        entry.set_progress_fraction(0.25);
        entry.set_progress_pulse_step(0.1);

        assert_eq!(entry.progress_fraction(), 0.25);
        assert!((entry.progress_pulse_step() - 0.1).abs() < f64::EPSILON);
    });
}

#[test]
fn test_entry_icons() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        let pos = ffi::GTK_ENTRY_ICON_SECONDARY;
        assert!(entry.icon_name(pos).is_none());

        entry.set_icon_from_icon_name(pos, Some("edit-clear-symbolic")).unwrap();
        entry.set_icon_tooltip_text(pos, Some("Clear")).unwrap();
        entry.set_icon_activatable(pos, false);

        assert_eq!(entry.icon_name(pos).unwrap().as_str(), "edit-clear-symbolic");
        assert_eq!(entry.icon_tooltip_text(pos).unwrap().to_str().unwrap(), "Clear");
        assert!(!entry.icon_is_activatable(pos));
        assert!(entry.icon_is_sensitive(pos));

        entry.set_icon_from_icon_name(pos, None).unwrap();
        assert!(entry.icon_name(pos).is_none());
    });
}

#[test]
fn test_entry_changed_signal() {
    with_gtk(|| {
        let entry = Entry::new().unwrap();
        let changes = Rc::new(Cell::new(0));

        let seen = changes.clone();
        entry.connect_signal("changed", move |_| seen.set(seen.get() + 1)).unwrap();
        entry.set_text("a").unwrap();
        entry.set_text("ab").unwrap();

        assert!(changes.get() >= 2);
    });
}

// ============================================================================
// Label
// ============================================================================

#[test]
fn test_label_without_text_is_empty() {
    with_gtk(|| {
        let label = Label::new(None).unwrap();
        assert_eq!(label.text().unwrap().as_str(), "");
    });
}

#[test]
fn test_label_markup_keeps_source() {
    with_gtk(|| {
        let label = Label::new(None).unwrap();
        label.set_markup("<b>Save</b> changes").unwrap();

        assert!(label.use_markup());
        assert_eq!(label.text().unwrap().as_str(), "Save changes");
        assert_eq!(label.label().unwrap().as_str(), "<b>Save</b> changes");
    });
}

#[test]
fn test_label_mnemonic() {
    with_gtk(|| {
        let label = Label::with_mnemonic("_Save").unwrap();
        assert!(label.use_underline());
        assert_eq!(label.mnemonic_keyval(), u32::from(b's'));
    });
}

#[test]
fn test_label_selection() {
    with_gtk(|| {
        let label = Label::new(Some("selectable text")).unwrap();
        label.set_selectable(true);
        label.select_region(0, 10);

        let mut start = 0;
        let mut end = 0;
        assert!(label.selection_bounds(Some(&mut start), Some(&mut end)));
        assert_eq!((start, end), (0, 10));
    });
}

#[test]
fn test_label_layout_properties() {
    with_gtk(|| {
        let label = Label::new(Some("wrapped")).unwrap();
        label.set_wrap(true);
        label.set_lines(3);
        label.set_max_width_chars(40);
        label.set_xalign(0.0);
        label.set_justify(ffi::GTK_JUSTIFY_CENTER);

        assert!(label.wraps());
        assert_eq!(label.lines(), 3);
        assert_eq!(label.max_width_chars(), 40);
        assert_eq!(label.xalign(), 0.0);
        assert_eq!(label.justify(), ffi::GTK_JUSTIFY_CENTER);
    });
}

// ============================================================================
// Button and Switch
// ============================================================================

#[test]
fn test_button_label_and_icon() {
    with_gtk(|| {
        let plain = Button::new().unwrap();
        assert!(plain.label().is_none());

        let button = Button::with_mnemonic("_Apply").unwrap();
        assert!(button.use_underline());
        button.set_label("Apply all").unwrap();
        assert_eq!(button.label().unwrap().as_str(), "Apply all");

        let icon = Button::from_icon_name("document-save-symbolic").unwrap();
        assert_eq!(icon.icon_name().unwrap().as_str(), "document-save-symbolic");
        assert!(icon.child().is_some());
    });
}

#[test]
fn test_button_child_replaces_label() {
    with_gtk(|| {
        let button = Button::with_label("Old").unwrap();
        let label = Label::new(Some("New")).unwrap();

        button.set_child(Some(&label));
        assert_eq!(button.child().unwrap().handle(), label.handle());

        button.set_has_frame(false);
        assert!(!button.has_frame());
    });
}

#[test]
fn test_switch_active_and_state() {
    with_gtk(|| {
        let switch = Switch::new().unwrap();
        assert!(!switch.is_active());

        switch.set_active(true);
        assert!(switch.is_active());
        assert!(switch.state(), "state follows active without a state-set handler");

        switch.set_state(false);
        assert!(!switch.state());
    });
}

#[test]
fn test_switch_notify_signal() {
    with_gtk(|| {
        let switch = Switch::new().unwrap();
        let toggles = Rc::new(Cell::new(0));

        let seen = toggles.clone();
        switch.connect_signal("notify::active", move |_| seen.set(seen.get() + 1)).unwrap();
        switch.set_active(true);
        switch.set_active(true);
        switch.set_active(false);

        assert_eq!(toggles.get(), 2);
        assert!(switch.sensitive());
    });
}
