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

use crate::core::binding::{cast_instance, Binding};
use gtk4::ffi;
use gtk4::gdk::ffi::GdkEvent;
use std::ptr;

/// In-place editing inside tree and icon views.
pub trait CellEditable: Binding {
    /// Interface pointer for this object.
    fn cell_editable_ptr(&self) -> *mut ffi::GtkCellEditable {
        // SAFETY: live handle; the cast only re-types the pointer.
        unsafe { cast_instance(self.handle().as_ptr(), ffi::gtk_cell_editable_get_type()) }
    }

    /// Emits `editing-done`.
    fn editing_done(&self) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_cell_editable_editing_done(self.cell_editable_ptr()) }
    }

    /// Emits `remove-widget`.
    fn remove_widget(&self) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_cell_editable_remove_widget(self.cell_editable_ptr()) }
    }

    /// Starts editing without a triggering event.
    fn start_editing(&self) {
        // SAFETY: a NULL event is allowed.
        unsafe { ffi::gtk_cell_editable_start_editing(self.cell_editable_ptr(), ptr::null_mut()) }
    }

    /// Starts editing in response to `event`.
    ///
    /// # Safety
    ///
    /// `event` must be NULL or a live `GdkEvent`.
    unsafe fn start_editing_with_event(&self, event: *mut GdkEvent) {
        // SAFETY: forwarded from the caller.
        unsafe { ffi::gtk_cell_editable_start_editing(self.cell_editable_ptr(), event) }
    }
}
