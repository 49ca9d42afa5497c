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

//! Multi-line text display and editing
//!
//! A `TextView` renders a [`TextBuffer`]. Iterators come from the buffer
//! (see [`TextIter`]); iterators from any other buffer are ignored. The
//! display-line methods here move them by visual rather than logical lines,
//! so results depend on the current wrapping and need a realized view to be
//! meaningful.

use crate::capabilities::{Buildable, Scrollable};
use crate::core::binding::{binding, Binding};
use crate::core::translate::{from_gboolean, out_ptr, to_gboolean};
use crate::error::{BindError, BindResult};
use crate::objects::{TextBuffer, TextIter};
use crate::widgets::widget::Widget;
use gtk4::ffi;
use gtk4::gdk::ffi::GdkRectangle;

binding!(
    /// A multi-line text widget.
    TextView,
    ffi::GtkTextView,
    "GtkTextView",
    ffi::gtk_text_view_get_type,
    extends Widget
);

impl Scrollable for TextView {}
impl Buildable for TextView {}

impl TextView {
    /// A view with a fresh, empty buffer.
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; the floating result is sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_text_view_new(), "gtk_text_view_new") }
    }

    pub fn with_buffer(buffer: &TextBuffer) -> BindResult<Self> {
        // SAFETY: the view takes its own reference to the buffer.
        unsafe { Self::wrap_none(ffi::gtk_text_view_new_with_buffer(buffer.native()), "gtk_text_view_new_with_buffer") }
    }

    pub fn buffer(&self) -> Option<TextBuffer> {
        // SAFETY: transfer none.
        unsafe { TextBuffer::wrap_optional_none(ffi::gtk_text_view_get_buffer(self.native())) }
    }

    pub fn set_buffer(&self, buffer: &TextBuffer) {
        // SAFETY: the view takes its own reference.
        unsafe { ffi::gtk_text_view_set_buffer(self.native(), buffer.native()) }
    }

    pub fn accepts_tab(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_view_get_accepts_tab(self.native()) })
    }

    pub fn set_accepts_tab(&self, accepts_tab: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_accepts_tab(self.native(), to_gboolean(accepts_tab)) }
    }

    pub fn is_editable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_view_get_editable(self.native()) })
    }

    pub fn set_editable(&self, editable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_editable(self.native(), to_gboolean(editable)) }
    }

    pub fn is_cursor_visible(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_view_get_cursor_visible(self.native()) })
    }

    pub fn set_cursor_visible(&self, visible: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_cursor_visible(self.native(), to_gboolean(visible)) }
    }

    pub fn is_monospace(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_view_get_monospace(self.native()) })
    }

    pub fn set_monospace(&self, monospace: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_monospace(self.native(), to_gboolean(monospace)) }
    }

    pub fn overwrite(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_view_get_overwrite(self.native()) })
    }

    pub fn set_overwrite(&self, overwrite: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_overwrite(self.native(), to_gboolean(overwrite)) }
    }

    pub fn left_margin(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_left_margin(self.native()) }
    }

    pub fn set_left_margin(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_left_margin(self.native(), margin) }
    }

    pub fn right_margin(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_right_margin(self.native()) }
    }

    pub fn set_right_margin(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_right_margin(self.native(), margin) }
    }

    pub fn top_margin(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_top_margin(self.native()) }
    }

    pub fn set_top_margin(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_top_margin(self.native(), margin) }
    }

    pub fn bottom_margin(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_bottom_margin(self.native()) }
    }

    pub fn set_bottom_margin(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_bottom_margin(self.native(), margin) }
    }

    pub fn indent(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_indent(self.native()) }
    }

    /// Paragraph indent in pixels; negative values hang.
    pub fn set_indent(&self, indent: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_indent(self.native(), indent) }
    }

    pub fn justification(&self) -> ffi::GtkJustification {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_justification(self.native()) }
    }

    pub fn set_justification(&self, justification: ffi::GtkJustification) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_justification(self.native(), justification) }
    }

    pub fn wrap_mode(&self) -> ffi::GtkWrapMode {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_wrap_mode(self.native()) }
    }

    pub fn set_wrap_mode(&self, wrap_mode: ffi::GtkWrapMode) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_wrap_mode(self.native(), wrap_mode) }
    }

    pub fn pixels_above_lines(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_pixels_above_lines(self.native()) }
    }

    pub fn set_pixels_above_lines(&self, pixels: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_pixels_above_lines(self.native(), pixels) }
    }

    pub fn pixels_below_lines(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_pixels_below_lines(self.native()) }
    }

    pub fn set_pixels_below_lines(&self, pixels: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_pixels_below_lines(self.native(), pixels) }
    }

    pub fn pixels_inside_wrap(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_pixels_inside_wrap(self.native()) }
    }

    pub fn set_pixels_inside_wrap(&self, pixels: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_pixels_inside_wrap(self.native(), pixels) }
    }

    pub fn input_hints(&self) -> ffi::GtkInputHints {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_input_hints(self.native()) }
    }

    pub fn set_input_hints(&self, hints: ffi::GtkInputHints) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_input_hints(self.native(), hints) }
    }

    pub fn input_purpose(&self) -> ffi::GtkInputPurpose {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_get_input_purpose(self.native()) }
    }

    pub fn set_input_purpose(&self, purpose: ffi::GtkInputPurpose) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_set_input_purpose(self.native(), purpose) }
    }

    /// Moves the cursor into the visible area. True if it moved.
    pub fn place_cursor_onscreen(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_view_place_cursor_onscreen(self.native()) })
    }

    pub fn reset_cursor_blink(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_reset_cursor_blink(self.native()) }
    }

    pub fn reset_im_context(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_view_reset_im_context(self.native()) }
    }

    /// The buffer iterators from this view point into.
    fn shown_buffer(&self) -> BindResult<TextBuffer> {
        self.buffer().ok_or(BindError::NullPointer("gtk_text_view_get_buffer"))
    }

    /// True if `iter` points into the buffer this view shows.
    fn shows(&self, iter: &TextIter) -> bool {
        self.buffer().is_some_and(|buffer| buffer.owns(iter))
    }

    /// Moves to the next display line. False for an iterator from another buffer.
    pub fn forward_display_line(&self, iter: &mut TextIter) -> bool {
        // SAFETY: `iter` belongs to this view's buffer.
        self.shows(iter) && from_gboolean(unsafe { ffi::gtk_text_view_forward_display_line(self.native(), iter.as_mut_ptr()) })
    }

    pub fn backward_display_line(&self, iter: &mut TextIter) -> bool {
        // SAFETY: `iter` belongs to this view's buffer.
        self.shows(iter) && from_gboolean(unsafe { ffi::gtk_text_view_backward_display_line(self.native(), iter.as_mut_ptr()) })
    }

    pub fn forward_display_line_end(&self, iter: &mut TextIter) -> bool {
        // SAFETY: `iter` belongs to this view's buffer.
        self.shows(iter)
            && from_gboolean(unsafe { ffi::gtk_text_view_forward_display_line_end(self.native(), iter.as_mut_ptr()) })
    }

    pub fn backward_display_line_start(&self, iter: &mut TextIter) -> bool {
        // SAFETY: `iter` belongs to this view's buffer.
        self.shows(iter)
            && from_gboolean(unsafe { ffi::gtk_text_view_backward_display_line_start(self.native(), iter.as_mut_ptr()) })
    }

    pub fn starts_display_line(&self, iter: &TextIter) -> bool {
        // SAFETY: `iter` belongs to this view's buffer.
        self.shows(iter) && from_gboolean(unsafe { ffi::gtk_text_view_starts_display_line(self.native(), iter.as_ptr()) })
    }

    /// Moves `count` characters in visual order (negative moves left).
    pub fn move_visually(&self, iter: &mut TextIter, count: i32) -> bool {
        // SAFETY: `iter` belongs to this view's buffer.
        self.shows(iter) && from_gboolean(unsafe { ffi::gtk_text_view_move_visually(self.native(), iter.as_mut_ptr(), count) })
    }

    /// The character under buffer coordinates `(x, y)`.
    ///
    /// The flag is false if the position is not over text; the iterator is
    /// then the nearest position.
    pub fn iter_at_location(&self, x: i32, y: i32) -> BindResult<(TextIter, bool)> {
        let buffer = self.shown_buffer()?;
        // SAFETY: the closure gets a valid out slot for this view's buffer.
        let (iter, over_text) = TextIter::filled(&buffer, |iter| unsafe {
            ffi::gtk_text_view_get_iter_at_location(self.native(), iter, x, y)
        });
        Ok((iter, from_gboolean(over_text)))
    }

    /// Like [`TextView::iter_at_location`], also reporting the trailing grapheme offset.
    pub fn iter_at_position(&self, trailing: Option<&mut i32>, x: i32, y: i32) -> BindResult<(TextIter, bool)> {
        let buffer = self.shown_buffer()?;
        // SAFETY: valid out slot; NULL trailing is allowed.
        let (iter, over_text) = TextIter::filled(&buffer, |iter| unsafe {
            ffi::gtk_text_view_get_iter_at_position(self.native(), iter, out_ptr(trailing), x, y)
        });
        Ok((iter, from_gboolean(over_text)))
    }

    pub fn buffer_to_window_coords(
        &self,
        window: ffi::GtkTextWindowType,
        buffer_x: i32,
        buffer_y: i32,
        window_x: Option<&mut i32>,
        window_y: Option<&mut i32>,
    ) {
        // SAFETY: NULL out slots are allowed.
        unsafe {
            ffi::gtk_text_view_buffer_to_window_coords(
                self.native(),
                window,
                buffer_x,
                buffer_y,
                out_ptr(window_x),
                out_ptr(window_y),
            )
        }
    }

    pub fn window_to_buffer_coords(
        &self,
        window: ffi::GtkTextWindowType,
        window_x: i32,
        window_y: i32,
        buffer_x: Option<&mut i32>,
        buffer_y: Option<&mut i32>,
    ) {
        // SAFETY: NULL out slots are allowed.
        unsafe {
            ffi::gtk_text_view_window_to_buffer_coords(
                self.native(),
                window,
                window_x,
                window_y,
                out_ptr(buffer_x),
                out_ptr(buffer_y),
            )
        }
    }

    /// The visible region in buffer coordinates.
    pub fn visible_rect(&self, rect: &mut GdkRectangle) {
        // SAFETY: `rect` is a valid out slot.
        unsafe { ffi::gtk_text_view_get_visible_rect(self.native(), rect) }
    }

    /// The rectangle of the character at `iter`, in buffer coordinates.
    ///
    /// `location` is left untouched for an iterator from another buffer.
    pub fn iter_location(&self, iter: &TextIter, location: &mut GdkRectangle) {
        if self.shows(iter) {
            // SAFETY: `location` is a valid out slot.
            unsafe { ffi::gtk_text_view_get_iter_location(self.native(), iter.as_ptr(), location) }
        }
    }

    pub fn line_yrange(&self, iter: &TextIter, y: Option<&mut i32>, height: Option<&mut i32>) {
        if self.shows(iter) {
            // SAFETY: NULL out slots are allowed.
            unsafe { ffi::gtk_text_view_get_line_yrange(self.native(), iter.as_ptr(), out_ptr(y), out_ptr(height)) }
        }
    }

    /// The start of the line containing `y`.
    pub fn line_at_y(&self, y: i32, line_top: Option<&mut i32>) -> BindResult<TextIter> {
        let buffer = self.shown_buffer()?;
        // SAFETY: valid out slot; NULL line_top is allowed.
        let (iter, ()) = TextIter::filled(&buffer, |target| unsafe {
            ffi::gtk_text_view_get_line_at_y(self.native(), target, y, out_ptr(line_top))
        });
        Ok(iter)
    }

    /// Strong and weak cursor rectangles at `iter`, or at the insert mark when `None`.
    pub fn cursor_locations(
        &self,
        iter: Option<&TextIter>,
        strong: Option<&mut GdkRectangle>,
        weak: Option<&mut GdkRectangle>,
    ) {
        if iter.is_some_and(|iter| !self.shows(iter)) {
            return;
        }
        let iter = iter.map_or(std::ptr::null(), TextIter::as_ptr);
        // SAFETY: every pointer is NULL or valid.
        unsafe { ffi::gtk_text_view_get_cursor_locations(self.native(), iter, out_ptr(strong), out_ptr(weak)) }
    }

    /// Scrolls so `iter` is visible. Only reliable once the view has been laid out.
    pub fn scroll_to_iter(
        &self,
        iter: &mut TextIter,
        within_margin: f64,
        align: Option<(f64, f64)>,
    ) -> bool {
        if !self.shows(iter) {
            return false;
        }
        let (xalign, yalign) = align.unwrap_or((0.0, 0.0));
        // SAFETY: `iter` belongs to this view's buffer.
        from_gboolean(unsafe {
            ffi::gtk_text_view_scroll_to_iter(
                self.native(),
                iter.as_mut_ptr(),
                within_margin,
                to_gboolean(align.is_some()),
                xalign,
                yalign,
            )
        })
    }
}
