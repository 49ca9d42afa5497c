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

use crate::core::{Binding, SignalExt};
use crate::test_support::with_gtk;
use crate::widgets::{Button, Dialog, DialogExt, Label, Widget, WidgetExt, Window, WindowExt};
use gtk4::ffi;
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Window
// ============================================================================

#[test]
fn test_title_can_be_cleared() {
    with_gtk(|| {
        let window = Window::new().unwrap();
        assert!(window.title().is_none());

        window.set_title(Some("Untitled document")).unwrap();
        assert_eq!(window.title().unwrap().as_str(), "Untitled document");

        window.set_title(None).unwrap();
        assert!(window.title().is_none());
        window.destroy();
    });
}

#[test]
fn test_title_outlives_setter() {
    with_gtk(|| {
        let window = Window::new().unwrap();
        window.set_title(Some("Before")).unwrap();

        let title = window.title().unwrap();
        let alias = window.clone();
        alias.set_title(None).unwrap();
        window.set_title(Some("After ".repeat(256).as_str())).unwrap();

        assert_eq!(title, "Before");
        window.destroy();
    });
}

#[test]
fn test_window_flags() {
    with_gtk(|| {
        let window = Window::new().unwrap();

        for value in [false, true] {
            window.set_decorated(value);
            window.set_deletable(value);
            window.set_modal(value);
            window.set_resizable(value);
            window.set_hide_on_close(value);
            window.set_destroy_with_parent(value);

            assert_eq!(window.is_decorated(), value);
            assert_eq!(window.is_deletable(), value);
            assert_eq!(window.is_modal(), value);
            assert_eq!(window.is_resizable(), value);
            assert_eq!(window.hides_on_close(), value);
            assert_eq!(window.destroys_with_parent(), value);
        }
        window.destroy();
    });
}

#[test]
fn test_default_size() {
    with_gtk(|| {
        let window = Window::new().unwrap();
        window.set_default_size(640, 480);

        let mut width = 0;
        let mut height = 0;
        window.default_size(Some(&mut width), Some(&mut height));
        assert_eq!((width, height), (640, 480));

        // Either out-param may be skipped
        window.default_size(None, Some(&mut height));
        window.destroy();
    });
}

#[test]
fn test_child_and_default_widget() {
    with_gtk(|| {
        let window = Window::new().unwrap();
        let button = Button::with_label("OK").unwrap();

        window.set_child(Some(&button));
        window.set_default_widget(Some(&button));

        assert_eq!(window.child().unwrap().handle(), button.handle());
        assert_eq!(window.default_widget().unwrap().handle(), button.handle());

        window.set_default_widget(None::<&Widget>);
        assert!(window.default_widget().is_none());
        window.destroy();
    });
}

#[test]
fn test_transient_for() {
    with_gtk(|| {
        let parent = Window::new().unwrap();
        let child = Window::new().unwrap();
        assert!(child.transient_for().is_none());

        child.set_transient_for(Some(&parent));
        assert_eq!(child.transient_for().unwrap(), parent);

        child.set_transient_for(None::<&Window>);
        assert!(child.transient_for().is_none());
        child.destroy();
        parent.destroy();
    });
}

#[test]
fn test_destroy_signal() {
    with_gtk(|| {
        let window = Window::new().unwrap();
        let closed = Rc::new(Cell::new(false));

        let flag = closed.clone();
        window.connect_signal("destroy", move |_| flag.set(true)).unwrap();
        window.destroy();

        assert!(closed.get());
    });
}

#[test]
fn test_unmapped_window_state() {
    with_gtk(|| {
        let window = Window::new().unwrap();
        assert!(!window.is_active());
        assert!(!window.is_fullscreen());
        window.destroy();
    });
}

// ============================================================================
// Dialog
// ============================================================================

#[test]
fn test_dialog_is_a_window() {
    with_gtk(|| {
        let dialog = Dialog::new().unwrap();
        dialog.set_title(Some("Confirm")).unwrap();

        let window: Window = dialog.upcast();
        assert_eq!(window.title().unwrap().as_str(), "Confirm");
        dialog.destroy();
    });
}

#[test]
fn test_dialog_buttons_and_responses() {
    with_gtk(|| {
        let dialog = Dialog::new().unwrap();
        let cancel = dialog.add_button("_Cancel", ffi::GTK_RESPONSE_CANCEL).unwrap();
        let apply = dialog.add_button("_Apply", ffi::GTK_RESPONSE_APPLY).unwrap();

        assert_eq!(dialog.response_for_widget(&cancel), ffi::GTK_RESPONSE_CANCEL);
        assert_eq!(dialog.widget_for_response(ffi::GTK_RESPONSE_APPLY).unwrap(), apply);

        dialog.set_response_sensitive(ffi::GTK_RESPONSE_APPLY, false);
        assert!(!apply.sensitive());

        let stranger = Label::new(Some("not a button")).unwrap();
        assert_eq!(dialog.response_for_widget(&stranger), ffi::GTK_RESPONSE_NONE);
        dialog.destroy();
    });
}

#[test]
fn test_dialog_response_signal() {
    with_gtk(|| {
        let dialog = Dialog::new().unwrap();
        let responses = Rc::new(Cell::new(0));

        let seen = responses.clone();
        dialog.connect_signal("response", move |_| seen.set(seen.get() + 1)).unwrap();
        dialog.response(ffi::GTK_RESPONSE_OK);

        assert_eq!(responses.get(), 1);
        dialog.destroy();
    });
}
