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

//! Multi-line text storage shown by [`TextView`](crate::widgets::TextView)
//!
//! Positions are [`TextIter`] values. Only a buffer (or a view showing it)
//! can create one, so an iterator always starts out initialised and keeps
//! its buffer alive. Any edit invalidates existing iterators: GTK then
//! refuses them with a warning instead of following stale pointers, except
//! for the iterators an edit call itself revalidates.

use crate::core::binding::{binding, Binding};
use crate::core::translate::{from_gboolean, to_cstring, to_gboolean, OwnedGStr};
use crate::error::{BindError, BindResult};
use gtk4::ffi;
use std::ffi::c_int;
use std::fmt;
use std::mem::MaybeUninit;
use std::ptr;

/// A position in a [`TextBuffer`].
#[derive(Clone)]
pub struct TextIter {
    raw: ffi::GtkTextIter,
    buffer: TextBuffer,
}

impl TextIter {
    /// Lets `fill` write a fresh iterator for `buffer`.
    pub(crate) fn filled<R>(buffer: &TextBuffer, fill: impl FnOnce(*mut ffi::GtkTextIter) -> R) -> (Self, R) {
        // SAFETY: plain pointers and integers; `fill` overwrites every field.
        let mut raw: ffi::GtkTextIter = unsafe { MaybeUninit::zeroed().assume_init() };
        let result = fill(&mut raw);
        (
            Self {
                raw,
                buffer: buffer.clone(),
            },
            result,
        )
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::GtkTextIter {
        &self.raw
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut ffi::GtkTextIter {
        &mut self.raw
    }

    /// The buffer this iterator points into.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Character offset from the start of the buffer.
    pub fn offset(&self) -> i32 {
        // SAFETY: initialised by the buffer, which is kept alive.
        unsafe { ffi::gtk_text_iter_get_offset(&self.raw) }
    }

    /// Zero-based line number.
    pub fn line(&self) -> i32 {
        // SAFETY: initialised by the buffer, which is kept alive.
        unsafe { ffi::gtk_text_iter_get_line(&self.raw) }
    }

    pub fn is_start(&self) -> bool {
        // SAFETY: initialised by the buffer, which is kept alive.
        from_gboolean(unsafe { ffi::gtk_text_iter_is_start(&self.raw) })
    }

    pub fn is_end(&self) -> bool {
        // SAFETY: initialised by the buffer, which is kept alive.
        from_gboolean(unsafe { ffi::gtk_text_iter_is_end(&self.raw) })
    }
}

impl fmt::Debug for TextIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextIter")
            .field("line", &self.line())
            .field("offset", &self.offset())
            .finish()
    }
}

fn byte_len(text: &str) -> c_int {
    c_int::try_from(text.len()).unwrap_or(-1)
}

binding!(
    /// Collection of text tags a buffer can apply.
    TextTagTable,
    ffi::GtkTextTagTable,
    "GtkTextTagTable",
    ffi::gtk_text_tag_table_get_type
);

impl TextTagTable {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; returns a new reference.
        unsafe { Self::wrap_full(ffi::gtk_text_tag_table_new(), "gtk_text_tag_table_new") }
    }

    pub fn size(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_tag_table_get_size(self.native()) }
    }
}

binding!(
    /// Editable text with undo support.
    TextBuffer,
    ffi::GtkTextBuffer,
    "GtkTextBuffer",
    ffi::gtk_text_buffer_get_type
);

impl TextBuffer {
    /// Creates a buffer. Without a table a fresh one is created.
    pub fn new(tag_table: Option<&TextTagTable>) -> BindResult<Self> {
        let table = tag_table.map_or(ptr::null_mut(), |t| t.native());
        // SAFETY: NULL table is allowed; returns a new reference.
        unsafe { Self::wrap_full(ffi::gtk_text_buffer_new(table), "gtk_text_buffer_new") }
    }

    pub fn tag_table(&self) -> Option<TextTagTable> {
        // SAFETY: transfer none object.
        unsafe { TextTagTable::wrap_optional_none(ffi::gtk_text_buffer_get_tag_table(self.native())) }
    }

    /// Replaces the whole contents.
    pub fn set_text(&self, text: &str) -> BindResult<()> {
        let c_text = to_cstring(text)?;
        // SAFETY: valid UTF-8 of the given byte length.
        unsafe { ffi::gtk_text_buffer_set_text(self.native(), c_text.as_ptr(), byte_len(text)) };
        Ok(())
    }

    /// Text in `[start, end)`. Freshly allocated, freed on drop.
    ///
    /// `None` if either iterator belongs to another buffer.
    pub fn text(&self, start: &TextIter, end: &TextIter, include_hidden: bool) -> Option<OwnedGStr> {
        if !self.owns(start) || !self.owns(end) {
            return None;
        }
        // SAFETY: both iterators belong to this buffer; transfer full string.
        unsafe {
            OwnedGStr::from_full(ffi::gtk_text_buffer_get_text(
                self.native(),
                start.as_ptr(),
                end.as_ptr(),
                to_gboolean(include_hidden),
            ))
        }
    }

    /// Like [`TextBuffer::text`] but keeps placeholder characters for embedded objects.
    pub fn slice(&self, start: &TextIter, end: &TextIter, include_hidden: bool) -> Option<OwnedGStr> {
        if !self.owns(start) || !self.owns(end) {
            return None;
        }
        // SAFETY: both iterators belong to this buffer; transfer full string.
        unsafe {
            OwnedGStr::from_full(ffi::gtk_text_buffer_get_slice(
                self.native(),
                start.as_ptr(),
                end.as_ptr(),
                to_gboolean(include_hidden),
            ))
        }
    }

    /// The whole contents, hidden text included.
    pub fn full_text(&self) -> Option<OwnedGStr> {
        let (start, end) = self.bounds();
        self.text(&start, &end, true)
    }

    pub fn start_iter(&self) -> TextIter {
        // SAFETY: the closure gets a valid out slot.
        TextIter::filled(self, |iter| unsafe { ffi::gtk_text_buffer_get_start_iter(self.native(), iter) }).0
    }

    pub fn end_iter(&self) -> TextIter {
        // SAFETY: the closure gets a valid out slot.
        TextIter::filled(self, |iter| unsafe { ffi::gtk_text_buffer_get_end_iter(self.native(), iter) }).0
    }

    pub fn bounds(&self) -> (TextIter, TextIter) {
        (self.start_iter(), self.end_iter())
    }

    /// Iterator at `char_offset`; GTK clamps out-of-range offsets to the end.
    pub fn iter_at_offset(&self, char_offset: i32) -> TextIter {
        // SAFETY: the closure gets a valid out slot.
        TextIter::filled(self, |iter| unsafe {
            ffi::gtk_text_buffer_get_iter_at_offset(self.native(), iter, char_offset)
        })
        .0
    }

    /// Start of `line`, or `None` when the line does not exist.
    pub fn iter_at_line(&self, line: i32) -> Option<TextIter> {
        // SAFETY: the closure gets a valid out slot.
        let (iter, found) = TextIter::filled(self, |iter| unsafe {
            ffi::gtk_text_buffer_get_iter_at_line(self.native(), iter, line)
        });
        from_gboolean(found).then_some(iter)
    }

    /// True if `iter` was created by this buffer.
    pub fn owns(&self, iter: &TextIter) -> bool {
        iter.buffer == *self
    }

    pub fn char_count(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_buffer_get_char_count(self.native()) }
    }

    pub fn line_count(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_buffer_get_line_count(self.native()) }
    }

    pub fn is_modified(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_buffer_get_modified(self.native()) })
    }

    pub fn set_modified(&self, modified: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_buffer_set_modified(self.native(), to_gboolean(modified)) }
    }

    pub fn enable_undo(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_buffer_get_enable_undo(self.native()) })
    }

    pub fn set_enable_undo(&self, enable_undo: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_buffer_set_enable_undo(self.native(), to_gboolean(enable_undo)) }
    }

    pub fn can_undo(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_buffer_get_can_undo(self.native()) })
    }

    pub fn undo(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_text_buffer_undo(self.native()) }
    }

    pub fn has_selection(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_text_buffer_get_has_selection(self.native()) })
    }

    /// Inserts at `iter`, which is moved past the new text.
    pub fn insert(&self, iter: &mut TextIter, text: &str) -> BindResult<()> {
        if !self.owns(iter) {
            return Err(BindError::InvalidIter("GtkTextBuffer"));
        }
        let c_text = to_cstring(text)?;
        // SAFETY: iterator from this buffer; valid UTF-8 of the given length.
        unsafe { ffi::gtk_text_buffer_insert(self.native(), iter.as_mut_ptr(), c_text.as_ptr(), byte_len(text)) };
        Ok(())
    }

    pub fn insert_at_cursor(&self, text: &str) -> BindResult<()> {
        let c_text = to_cstring(text)?;
        // SAFETY: valid UTF-8 of the given length.
        unsafe { ffi::gtk_text_buffer_insert_at_cursor(self.native(), c_text.as_ptr(), byte_len(text)) };
        Ok(())
    }

    /// Deletes `[start, end)`; both iterators are revalidated to the deletion point.
    pub fn delete(&self, start: &mut TextIter, end: &mut TextIter) -> BindResult<()> {
        if !self.owns(start) || !self.owns(end) {
            return Err(BindError::InvalidIter("GtkTextBuffer"));
        }
        // SAFETY: iterators from this buffer.
        unsafe { ffi::gtk_text_buffer_delete(self.native(), start.as_mut_ptr(), end.as_mut_ptr()) };
        Ok(())
    }
}
