//! Object binding tests
//!
//! Contains test suites for the non-widget objects:
//! - Builder loading, lookup and error reporting
//! - Text and entry buffers
//! - List store and tree paths
//! - Files and file filters
//!
//! Anything that needs GTK runs through `with_gtk` and is skipped without a display.

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod buffer_tests;
