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

//! GTK initialisation

use crate::core::translate::from_gboolean;
use crate::error::{BindError, BindResult};
use gtk4::ffi;
use log::debug;

/// Initialises GTK if needed.
///
/// Fails with [`BindError::NotInitialized`] when no display is available.
/// Must be called on the thread that will run the main loop.
pub fn init() -> BindResult<()> {
    if is_initialized() {
        return Ok(());
    }
    // SAFETY: gtk_init_check has no preconditions besides thread affinity.
    if from_gboolean(unsafe { ffi::gtk_init_check() }) {
        let (major, minor, micro) = version();
        debug!("GTK {}.{}.{} initialised", major, minor, micro);
        Ok(())
    } else {
        Err(BindError::NotInitialized)
    }
}

pub fn is_initialized() -> bool {
    // SAFETY: no preconditions.
    from_gboolean(unsafe { ffi::gtk_is_initialized() })
}

/// Version of the GTK library loaded at runtime.
pub fn version() -> (u32, u32, u32) {
    // SAFETY: no preconditions.
    unsafe {
        (
            ffi::gtk_get_major_version(),
            ffi::gtk_get_minor_version(),
            ffi::gtk_get_micro_version(),
        )
    }
}
