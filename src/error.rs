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

//! Error type shared by every binding.
//!
//! The wrapped library reports failure in three ways: a false `gboolean`,
//! a NULL return, or a filled `GError` out-parameter. Booleans stay booleans
//! and optional returns stay `Option`; everything that would otherwise be a
//! crash (NULL from a constructor, wrong runtime type, unset value box,
//! foreign iterator) or a `GError` becomes a [`BindError`].

use std::ffi::NulError;
use std::str::Utf8Error;
use thiserror::Error;

/// Errors raised at the binding boundary.
#[derive(Debug, Error)]
pub enum BindError {
    /// A native call that should produce an object returned NULL.
    #[error("{0} returned NULL")]
    NullPointer(&'static str),
    /// A Rust string could not be passed to C because it contains a NUL byte.
    #[error("String contains an interior NUL byte: {0}")]
    InteriorNul(#[from] NulError),
    /// A handle was wrapped as a type it is not an instance of.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
    /// The native library reported a `GError`.
    #[error("GTK error: {0}")]
    Native(#[from] glib::Error),
    /// A `TypeWrapper` was asked for its value pointer before one was set.
    #[error("TypeWrapper has no GValue set")]
    UnsetValue,
    /// GTK could not be initialised (usually no display is available).
    #[error("GTK is not initialised and could not be initialised")]
    NotInitialized,
    /// `g_signal_connect_data` refused the signal name.
    #[error("Unknown signal '{signal}' on {type_name}")]
    UnknownSignal { signal: String, type_name: String },
    /// The signal exists but its handlers must return a value.
    #[error("Signal '{signal}' on {type_name} expects a {return_type} return value")]
    UnsupportedSignal {
        signal: String,
        type_name: String,
        return_type: String,
    },
    /// An iterator was used with a buffer or model it does not point into,
    /// or its row has since been removed.
    #[error("Iterator does not point into this {0}")]
    InvalidIter(&'static str),
    /// A native string was not valid UTF-8.
    #[error("Native string is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),
}

/// Result alias used throughout the crate.
pub type BindResult<T> = Result<T, BindError>;
