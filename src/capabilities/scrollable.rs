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
use crate::core::translate::from_gboolean;
use crate::objects::Adjustment;
use gtk4::ffi;
use std::ptr;

/// Widgets that scroll through a pair of adjustments.
pub trait Scrollable: Binding {
    /// Interface pointer for this object.
    fn scrollable_ptr(&self) -> *mut ffi::GtkScrollable {
        // SAFETY: live handle; the cast only re-types the pointer.
        unsafe { cast_instance(self.handle().as_ptr(), ffi::gtk_scrollable_get_type()) }
    }

    fn hadjustment(&self) -> Option<Adjustment> {
        // SAFETY: transfer none object.
        unsafe { Adjustment::wrap_optional_none(ffi::gtk_scrollable_get_hadjustment(self.scrollable_ptr())) }
    }

    /// `None` lets the widget create its own adjustment.
    fn set_hadjustment(&self, adjustment: Option<&Adjustment>) {
        let adjustment = adjustment.map_or(ptr::null_mut(), |a| a.native());
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_scrollable_set_hadjustment(self.scrollable_ptr(), adjustment) }
    }

    fn vadjustment(&self) -> Option<Adjustment> {
        // SAFETY: transfer none object.
        unsafe { Adjustment::wrap_optional_none(ffi::gtk_scrollable_get_vadjustment(self.scrollable_ptr())) }
    }

    fn set_vadjustment(&self, adjustment: Option<&Adjustment>) {
        let adjustment = adjustment.map_or(ptr::null_mut(), |a| a.native());
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_scrollable_set_vadjustment(self.scrollable_ptr(), adjustment) }
    }

    fn hscroll_policy(&self) -> ffi::GtkScrollablePolicy {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_scrollable_get_hscroll_policy(self.scrollable_ptr()) }
    }

    fn set_hscroll_policy(&self, policy: ffi::GtkScrollablePolicy) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_scrollable_set_hscroll_policy(self.scrollable_ptr(), policy) }
    }

    fn vscroll_policy(&self) -> ffi::GtkScrollablePolicy {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_scrollable_get_vscroll_policy(self.scrollable_ptr()) }
    }

    fn set_vscroll_policy(&self, policy: ffi::GtkScrollablePolicy) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_scrollable_set_vscroll_policy(self.scrollable_ptr(), policy) }
    }

    /// Fills `border` with the non-scrolling area, if the widget has one.
    fn border(&self, border: &mut ffi::GtkBorder) -> bool {
        // SAFETY: `border` is a valid out slot.
        from_gboolean(unsafe { ffi::gtk_scrollable_get_border(self.scrollable_ptr(), border) })
    }
}
