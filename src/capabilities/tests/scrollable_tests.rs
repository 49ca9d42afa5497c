use crate::capabilities::Scrollable;
use crate::objects::Adjustment;
use crate::test_support::with_gtk;
use crate::widgets::{TextView, TreeView};
use gtk4::ffi;

#[test]
fn test_adjustments_can_be_shared() {
    with_gtk(|| {
        let adjustment = Adjustment::new(0.0, 0.0, 100.0, 1.0, 10.0, 10.0).unwrap();
        let text_view = TextView::new().unwrap();
        let tree_view = TreeView::new().unwrap();

        text_view.set_vadjustment(Some(&adjustment));
        tree_view.set_vadjustment(Some(&adjustment));

        assert_eq!(text_view.vadjustment().unwrap(), adjustment);
        assert_eq!(tree_view.vadjustment().unwrap(), adjustment);
    });
}

#[test]
fn test_unset_adjustment_is_replaced() {
    with_gtk(|| {
        let text_view = TextView::new().unwrap();
        text_view.set_hadjustment(None);

        // GTK installs a fresh adjustment rather than leaving NULL
        assert!(text_view.hadjustment().is_some());
    });
}

#[test]
fn test_scroll_policies() {
    with_gtk(|| {
        let text_view = TextView::new().unwrap();

        text_view.set_hscroll_policy(ffi::GTK_SCROLL_NATURAL);
        text_view.set_vscroll_policy(ffi::GTK_SCROLL_MINIMUM);

        assert_eq!(text_view.hscroll_policy(), ffi::GTK_SCROLL_NATURAL);
        assert_eq!(text_view.vscroll_policy(), ffi::GTK_SCROLL_MINIMUM);
    });
}
