//! Core module tests
//!
//! Contains test suites for the binding foundation:
//! - String, boolean and GError translation
//! - Handle reference counting and floating references
//! - Checked casts between bindings
//! - TypeWrapper value box
//! - Signal connection
//!
//! None of these need a display; they run against plain GObject/GIO types.

#[cfg(test)]
mod translate_tests;
#[cfg(test)]
mod value_tests;
