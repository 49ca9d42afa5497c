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
use crate::error::BindResult;
use gtk4::ffi;

binding!(
    /// A bounded value with step and page increments, used by scrollables.
    Adjustment,
    ffi::GtkAdjustment,
    "GtkAdjustment",
    ffi::gtk_adjustment_get_type
);

impl Adjustment {
    pub fn new(
        value: f64,
        lower: f64,
        upper: f64,
        step_increment: f64,
        page_increment: f64,
        page_size: f64,
    ) -> BindResult<Self> {
        // SAFETY: no preconditions; the result is floating and sunk by wrap_none.
        unsafe {
            Self::wrap_none(
                ffi::gtk_adjustment_new(value, lower, upper, step_increment, page_increment, page_size),
                "gtk_adjustment_new",
            )
        }
    }

    pub fn value(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_get_value(self.native()) }
    }

    /// Sets the value, clamped to `[lower, upper - page_size]`.
    pub fn set_value(&self, value: f64) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_set_value(self.native(), value) }
    }

    pub fn lower(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_get_lower(self.native()) }
    }

    pub fn set_lower(&self, lower: f64) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_set_lower(self.native(), lower) }
    }

    pub fn upper(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_get_upper(self.native()) }
    }

    pub fn set_upper(&self, upper: f64) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_set_upper(self.native(), upper) }
    }

    pub fn step_increment(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_get_step_increment(self.native()) }
    }

    pub fn page_size(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_get_page_size(self.native()) }
    }

    pub fn set_page_size(&self, page_size: f64) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_adjustment_set_page_size(self.native(), page_size) }
    }
}
