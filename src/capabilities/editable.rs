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

//! The `GtkEditable` interface (text entry editing).

use crate::core::binding::{cast_instance, Binding};
use crate::core::translate::{from_gboolean, out_ptr, to_cstring, to_gboolean, OwnedGStr};
use crate::error::BindResult;
use glib::translate::from_glib_none;
use gtk4::ffi;
use std::ffi::c_int;

/// Editable single-line text.
///
/// Positions and ranges are in characters, not bytes. An end position of
/// -1 means "to the end of the text".
pub trait Editable: Binding {
    /// Interface pointer for this object.
    fn editable_ptr(&self) -> *mut ffi::GtkEditable {
        // SAFETY: live handle; the cast only re-types the pointer.
        unsafe { cast_instance(self.handle().as_ptr(), ffi::gtk_editable_get_type()) }
    }

    /// Current contents. Valid until the text next changes.
    fn text(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the widget; copied before returning.
        unsafe { from_glib_none(ffi::gtk_editable_get_text(self.editable_ptr())) }
    }

    fn set_text(&self, text: &str) -> BindResult<()> {
        let c_text = to_cstring(text)?;
        // SAFETY: valid C string; the widget copies it.
        unsafe { ffi::gtk_editable_set_text(self.editable_ptr(), c_text.as_ptr()) };
        Ok(())
    }

    /// Copy of the characters in `[start, end)`.
    fn chars(&self, start: i32, end: i32) -> Option<OwnedGStr> {
        // SAFETY: transfer full string.
        unsafe { OwnedGStr::from_full(ffi::gtk_editable_get_chars(self.editable_ptr(), start, end)) }
    }

    /// Inserts `text` at `position`, advancing it past the insertion.
    fn insert_text(&self, text: &str, position: &mut i32) -> BindResult<()> {
        let c_text = to_cstring(text)?;
        let length = c_int::try_from(text.len()).unwrap_or(-1);
        // SAFETY: valid C string of `length` bytes; position is a valid out slot.
        unsafe { ffi::gtk_editable_insert_text(self.editable_ptr(), c_text.as_ptr(), length, position) };
        Ok(())
    }

    fn delete_text(&self, start: i32, end: i32) {
        // SAFETY: live interface pointer; GTK clamps the range.
        unsafe { ffi::gtk_editable_delete_text(self.editable_ptr(), start, end) }
    }

    fn delete_selection(&self) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_delete_selection(self.editable_ptr()) }
    }

    fn select_region(&self, start: i32, end: i32) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_select_region(self.editable_ptr(), start, end) }
    }

    /// Writes the selection bounds into whichever slots are given.
    ///
    /// Returns false when nothing is selected.
    fn selection_bounds(&self, start: Option<&mut i32>, end: Option<&mut i32>) -> bool {
        // SAFETY: both out-parameters may be NULL.
        from_gboolean(unsafe {
            ffi::gtk_editable_get_selection_bounds(self.editable_ptr(), out_ptr(start), out_ptr(end))
        })
    }

    fn position(&self) -> i32 {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_get_position(self.editable_ptr()) }
    }

    fn set_position(&self, position: i32) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_set_position(self.editable_ptr(), position) }
    }

    fn is_editable(&self) -> bool {
        // SAFETY: live interface pointer.
        from_gboolean(unsafe { ffi::gtk_editable_get_editable(self.editable_ptr()) })
    }

    fn set_editable(&self, editable: bool) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_set_editable(self.editable_ptr(), to_gboolean(editable)) }
    }

    fn enable_undo(&self) -> bool {
        // SAFETY: live interface pointer.
        from_gboolean(unsafe { ffi::gtk_editable_get_enable_undo(self.editable_ptr()) })
    }

    fn set_enable_undo(&self, enable_undo: bool) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_set_enable_undo(self.editable_ptr(), to_gboolean(enable_undo)) }
    }

    fn alignment(&self) -> f32 {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_get_alignment(self.editable_ptr()) }
    }

    fn set_alignment(&self, xalign: f32) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_set_alignment(self.editable_ptr(), xalign) }
    }

    fn width_chars(&self) -> i32 {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_get_width_chars(self.editable_ptr()) }
    }

    fn set_width_chars(&self, n_chars: i32) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_set_width_chars(self.editable_ptr(), n_chars) }
    }

    fn max_width_chars(&self) -> i32 {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_get_max_width_chars(self.editable_ptr()) }
    }

    fn set_max_width_chars(&self, n_chars: i32) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_editable_set_max_width_chars(self.editable_ptr(), n_chars) }
    }
}
