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
use crate::core::translate::{from_gboolean, to_gboolean};
use crate::error::BindResult;
use crate::widgets::widget::Widget;
use gtk4::ffi;

binding!(
    /// An on/off toggle.
    ///
    /// `active` is the requested position; `state` is the backend state,
    /// which normally follows `active` unless a `state-set` handler delays it.
    Switch,
    ffi::GtkSwitch,
    "GtkSwitch",
    ffi::gtk_switch_get_type,
    extends Widget
);

impl Switch {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; the floating result is sunk by wrap_none.
        unsafe { Self::wrap_none(ffi::gtk_switch_new(), "gtk_switch_new") }
    }

    pub fn is_active(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_switch_get_active(self.native()) })
    }

    pub fn set_active(&self, active: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_switch_set_active(self.native(), to_gboolean(active)) }
    }

    pub fn state(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_switch_get_state(self.native()) })
    }

    pub fn set_state(&self, state: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_switch_set_state(self.native(), to_gboolean(state)) }
    }
}
