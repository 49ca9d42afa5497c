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

//! Single-line text entries
//!
//! Text access, selection, and the position cursor live in the
//! [`Editable`] capability; this module adds what is specific to
//! `GtkEntry`: the buffer, progress display and the two icon slots.

use crate::capabilities::{Buildable, CellEditable, Editable};
use crate::core::binding::{binding, Binding};
use crate::core::translate::{
    from_gboolean, optional_ptr, to_gboolean, to_optional_cstring, OwnedGStr,
};
use crate::error::BindResult;
use crate::objects::EntryBuffer;
use crate::widgets::widget::Widget;
use glib::translate::from_glib_none;
use gtk4::ffi;
use gtk4::gdk::ffi::GdkRectangle;

binding!(
    /// A single-line text field.
    Entry,
    ffi::GtkEntry,
    "GtkEntry",
    ffi::gtk_entry_get_type,
    extends Widget
);

impl Editable for Entry {}
impl CellEditable for Entry {}
impl Buildable for Entry {}

impl Entry {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; the floating result is sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_entry_new(), "gtk_entry_new") }
    }

    /// An entry displaying (and editing) `buffer`.
    pub fn with_buffer(buffer: &EntryBuffer) -> BindResult<Self> {
        // SAFETY: the entry takes its own reference to the buffer.
        unsafe { Self::wrap_none(ffi::gtk_entry_new_with_buffer(buffer.native()), "gtk_entry_new_with_buffer") }
    }

    pub fn buffer(&self) -> Option<EntryBuffer> {
        // SAFETY: transfer none.
        unsafe { EntryBuffer::wrap_optional_none(ffi::gtk_entry_get_buffer(self.native())) }
    }

    pub fn set_buffer(&self, buffer: &EntryBuffer) {
        // SAFETY: the entry takes its own reference.
        unsafe { ffi::gtk_entry_set_buffer(self.native(), buffer.native()) }
    }

    pub fn activates_default(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_entry_get_activates_default(self.native()) })
    }

    /// Whether pressing Enter activates the window's default widget.
    pub fn set_activates_default(&self, setting: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_activates_default(self.native(), to_gboolean(setting)) }
    }

    pub fn has_frame(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_entry_get_has_frame(self.native()) })
    }

    pub fn set_has_frame(&self, setting: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_has_frame(self.native(), to_gboolean(setting)) }
    }

    /// Maximum length in characters; 0 means unlimited.
    pub fn max_length(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_max_length(self.native()) }
    }

    pub fn set_max_length(&self, max: i32) {
        // SAFETY: live handle; GTK clamps to [0, 65535].
        unsafe { ffi::gtk_entry_set_max_length(self.native(), max) }
    }

    pub fn overwrite_mode(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_entry_get_overwrite_mode(self.native()) })
    }

    pub fn set_overwrite_mode(&self, overwrite: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_overwrite_mode(self.native(), to_gboolean(overwrite)) }
    }

    pub fn placeholder_text(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the entry; copied before returning.
        unsafe { from_glib_none(ffi::gtk_entry_get_placeholder_text(self.native())) }
    }

    pub fn set_placeholder_text(&self, text: Option<&str>) -> BindResult<()> {
        let c_text = to_optional_cstring(text)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_entry_set_placeholder_text(self.native(), optional_ptr(&c_text)) };
        Ok(())
    }

    pub fn progress_fraction(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_progress_fraction(self.native()) }
    }

    pub fn set_progress_fraction(&self, fraction: f64) {
        // SAFETY: live handle; GTK clamps to [0.0, 1.0].
        unsafe { ffi::gtk_entry_set_progress_fraction(self.native(), fraction) }
    }

    pub fn progress_pulse_step(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_progress_pulse_step(self.native()) }
    }

    pub fn set_progress_pulse_step(&self, fraction: f64) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_progress_pulse_step(self.native(), fraction) }
    }

    /// Moves the activity indicator by one pulse step.
    pub fn progress_pulse(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_progress_pulse(self.native()) }
    }

    /// False when the text is shown as invisible characters.
    pub fn visibility(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_entry_get_visibility(self.native()) })
    }

    pub fn set_visibility(&self, visible: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_visibility(self.native(), to_gboolean(visible)) }
    }

    /// The replacement character, or `None` if GTK uses its default.
    pub fn invisible_char(&self) -> Option<char> {
        // SAFETY: live handle.
        let ch = unsafe { ffi::gtk_entry_get_invisible_char(self.native()) };
        if ch == 0 {
            None
        } else {
            char::from_u32(ch)
        }
    }

    pub fn set_invisible_char(&self, ch: char) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_invisible_char(self.native(), u32::from(ch)) }
    }

    pub fn unset_invisible_char(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_unset_invisible_char(self.native()) }
    }

    /// Text length in characters.
    pub fn text_length(&self) -> u16 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_text_length(self.native()) }
    }

    pub fn input_hints(&self) -> ffi::GtkInputHints {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_input_hints(self.native()) }
    }

    pub fn set_input_hints(&self, hints: ffi::GtkInputHints) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_input_hints(self.native(), hints) }
    }

    pub fn input_purpose(&self) -> ffi::GtkInputPurpose {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_input_purpose(self.native()) }
    }

    pub fn set_input_purpose(&self, purpose: ffi::GtkInputPurpose) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_input_purpose(self.native(), purpose) }
    }

    /// Focuses the entry without selecting its contents.
    pub fn grab_focus_without_selecting(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_entry_grab_focus_without_selecting(self.native()) })
    }

    pub fn reset_im_context(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_reset_im_context(self.native()) }
    }

    pub fn icon_name(&self, icon_pos: ffi::GtkEntryIconPosition) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the entry; copied before returning.
        unsafe { from_glib_none(ffi::gtk_entry_get_icon_name(self.native(), icon_pos)) }
    }

    /// `None` removes the icon.
    pub fn set_icon_from_icon_name(&self, icon_pos: ffi::GtkEntryIconPosition, icon_name: Option<&str>) -> BindResult<()> {
        let c_name = to_optional_cstring(icon_name)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_entry_set_icon_from_icon_name(self.native(), icon_pos, optional_ptr(&c_name)) };
        Ok(())
    }

    /// Unlike most getters, the tooltip comes back as a fresh copy.
    pub fn icon_tooltip_text(&self, icon_pos: ffi::GtkEntryIconPosition) -> Option<OwnedGStr> {
        // SAFETY: transfer full.
        unsafe { OwnedGStr::from_full(ffi::gtk_entry_get_icon_tooltip_text(self.native(), icon_pos)) }
    }

    pub fn set_icon_tooltip_text(&self, icon_pos: ffi::GtkEntryIconPosition, tooltip: Option<&str>) -> BindResult<()> {
        let c_tooltip = to_optional_cstring(tooltip)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_entry_set_icon_tooltip_text(self.native(), icon_pos, optional_ptr(&c_tooltip)) };
        Ok(())
    }

    pub fn icon_tooltip_markup(&self, icon_pos: ffi::GtkEntryIconPosition) -> Option<OwnedGStr> {
        // SAFETY: transfer full.
        unsafe { OwnedGStr::from_full(ffi::gtk_entry_get_icon_tooltip_markup(self.native(), icon_pos)) }
    }

    pub fn set_icon_tooltip_markup(&self, icon_pos: ffi::GtkEntryIconPosition, tooltip: Option<&str>) -> BindResult<()> {
        let c_tooltip = to_optional_cstring(tooltip)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_entry_set_icon_tooltip_markup(self.native(), icon_pos, optional_ptr(&c_tooltip)) };
        Ok(())
    }

    pub fn icon_is_activatable(&self, icon_pos: ffi::GtkEntryIconPosition) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_entry_get_icon_activatable(self.native(), icon_pos) })
    }

    pub fn set_icon_activatable(&self, icon_pos: ffi::GtkEntryIconPosition, activatable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_icon_activatable(self.native(), icon_pos, to_gboolean(activatable)) }
    }

    pub fn icon_is_sensitive(&self, icon_pos: ffi::GtkEntryIconPosition) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_entry_get_icon_sensitive(self.native(), icon_pos) })
    }

    pub fn set_icon_sensitive(&self, icon_pos: ffi::GtkEntryIconPosition, sensitive: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_set_icon_sensitive(self.native(), icon_pos, to_gboolean(sensitive)) }
    }

    /// The icon under `(x, y)`, or -1 if there is none.
    pub fn icon_at_pos(&self, x: i32, y: i32) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_icon_at_pos(self.native(), x, y) }
    }

    /// Fills `area` with the icon's allocation; all zero if the icon is unset.
    pub fn icon_area(&self, icon_pos: ffi::GtkEntryIconPosition, area: &mut GdkRectangle) {
        // SAFETY: `area` is a valid out slot.
        unsafe { ffi::gtk_entry_get_icon_area(self.native(), icon_pos, area) }
    }

    /// The icon being dragged from, or -1 outside a drag.
    pub fn current_icon_drag_source(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_get_current_icon_drag_source(self.native()) }
    }
}
