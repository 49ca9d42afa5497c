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

//! Text labels
//!
//! [`Label::text`] is the displayed text with markup and mnemonics stripped;
//! [`Label::label`] is the raw string as set.

use crate::capabilities::Buildable;
use crate::core::binding::{binding, Binding};
use crate::core::translate::{from_gboolean, optional_ptr, out_ptr, to_cstring, to_gboolean, to_optional_cstring};
use crate::error::BindResult;
use crate::widgets::widget::Widget;
use glib::translate::from_glib_none;
use gtk4::ffi;

binding!(
    Label,
    ffi::GtkLabel,
    "GtkLabel",
    ffi::gtk_label_get_type,
    extends Widget
);

impl Buildable for Label {}

impl Label {
    /// `None` creates an empty label.
    pub fn new(text: Option<&str>) -> BindResult<Self> {
        let c_text = to_optional_cstring(text)?;
        // SAFETY: NULL is allowed; the floating result is sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_label_new(optional_ptr(&c_text)), "gtk_label_new") }
    }

    pub fn with_mnemonic(text: &str) -> BindResult<Self> {
        let c_text = to_cstring(text)?;
        // SAFETY: valid C string.
        unsafe { Self::wrap_none(ffi::gtk_label_new_with_mnemonic(c_text.as_ptr()), "gtk_label_new_with_mnemonic") }
    }

    pub fn text(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the label; copied before returning.
        unsafe { from_glib_none(ffi::gtk_label_get_text(self.native())) }
    }

    pub fn set_text(&self, text: &str) -> BindResult<()> {
        let c_text = to_cstring(text)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { ffi::gtk_label_set_text(self.native(), c_text.as_ptr()) };
        Ok(())
    }

    pub fn label(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the label; copied before returning.
        unsafe { from_glib_none(ffi::gtk_label_get_label(self.native())) }
    }

    pub fn set_label(&self, label: &str) -> BindResult<()> {
        let c_label = to_cstring(label)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { ffi::gtk_label_set_label(self.native(), c_label.as_ptr()) };
        Ok(())
    }

    /// Parses `markup` as Pango markup and enables `use-markup`.
    pub fn set_markup(&self, markup: &str) -> BindResult<()> {
        let c_markup = to_cstring(markup)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { ffi::gtk_label_set_markup(self.native(), c_markup.as_ptr()) };
        Ok(())
    }

    pub fn is_selectable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_label_get_selectable(self.native()) })
    }

    pub fn set_selectable(&self, selectable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_selectable(self.native(), to_gboolean(selectable)) }
    }

    pub fn wraps(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_label_get_wrap(self.native()) })
    }

    pub fn set_wrap(&self, wrap: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_wrap(self.native(), to_gboolean(wrap)) }
    }

    pub fn use_markup(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_label_get_use_markup(self.native()) })
    }

    pub fn set_use_markup(&self, use_markup: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_use_markup(self.native(), to_gboolean(use_markup)) }
    }

    pub fn use_underline(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_label_get_use_underline(self.native()) })
    }

    pub fn set_use_underline(&self, use_underline: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_use_underline(self.native(), to_gboolean(use_underline)) }
    }

    /// Line limit when ellipsizing a wrapped label; -1 means unlimited.
    pub fn lines(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_get_lines(self.native()) }
    }

    pub fn set_lines(&self, lines: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_lines(self.native(), lines) }
    }

    pub fn max_width_chars(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_get_max_width_chars(self.native()) }
    }

    pub fn set_max_width_chars(&self, n_chars: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_max_width_chars(self.native(), n_chars) }
    }

    pub fn xalign(&self) -> f32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_get_xalign(self.native()) }
    }

    pub fn set_xalign(&self, xalign: f32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_xalign(self.native(), xalign) }
    }

    pub fn justify(&self) -> ffi::GtkJustification {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_get_justify(self.native()) }
    }

    pub fn set_justify(&self, justify: ffi::GtkJustification) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_set_justify(self.native(), justify) }
    }

    /// Selects characters `start..end`. Has no effect unless the label is selectable.
    pub fn select_region(&self, start: i32, end: i32) {
        // SAFETY: live handle; GTK clamps the offsets.
        unsafe { ffi::gtk_label_select_region(self.native(), start, end) }
    }

    /// False if nothing is selected.
    pub fn selection_bounds(&self, start: Option<&mut i32>, end: Option<&mut i32>) -> bool {
        // SAFETY: NULL out slots are allowed.
        from_gboolean(unsafe { ffi::gtk_label_get_selection_bounds(self.native(), out_ptr(start), out_ptr(end)) })
    }

    /// The mnemonic key, or `GDK_KEY_VoidSymbol` (0xffffff) if there is none.
    pub fn mnemonic_keyval(&self) -> u32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_label_get_mnemonic_keyval(self.native()) }
    }
}
