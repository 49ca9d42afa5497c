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

use crate::core::binding::{binding, Binding};
use crate::core::translate::{optional_ptr, to_cstring, to_optional_cstring};
use crate::error::BindResult;
use glib::translate::from_glib_none;
use gtk4::ffi;

binding!(
    /// Text storage for [`Entry`](crate::widgets::Entry), shareable between entries.
    EntryBuffer,
    ffi::GtkEntryBuffer,
    "GtkEntryBuffer",
    ffi::gtk_entry_buffer_get_type
);

impl EntryBuffer {
    pub fn new(initial: Option<&str>) -> BindResult<Self> {
        let c_initial = to_optional_cstring(initial)?;
        // SAFETY: NULL initial text is allowed; -1 means NUL-terminated.
        unsafe { Self::wrap_full(ffi::gtk_entry_buffer_new(optional_ptr(&c_initial), -1), "gtk_entry_buffer_new") }
    }

    pub fn text(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the buffer; copied before returning.
        unsafe { from_glib_none(ffi::gtk_entry_buffer_get_text(self.native())) }
    }

    pub fn set_text(&self, text: &str) -> BindResult<()> {
        let c_text = to_cstring(text)?;
        // SAFETY: valid C string; -1 means NUL-terminated.
        unsafe { ffi::gtk_entry_buffer_set_text(self.native(), c_text.as_ptr(), -1) };
        Ok(())
    }

    /// Length in characters.
    pub fn length(&self) -> u32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_buffer_get_length(self.native()) }
    }

    /// Length in bytes.
    pub fn bytes(&self) -> usize {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_buffer_get_bytes(self.native()) }
    }

    pub fn max_length(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_buffer_get_max_length(self.native()) }
    }

    /// 0 means unlimited.
    pub fn set_max_length(&self, max_length: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_entry_buffer_set_max_length(self.native(), max_length) }
    }
}
