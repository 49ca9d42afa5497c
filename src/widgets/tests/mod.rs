//! Widget binding tests
//!
//! Contains test suites for the widget layer:
//! - Common widget properties and the class hierarchy
//! - Windows and dialogs
//! - Entry, label, button and switch
//! - Text and tree views
//!
//! Every test here needs GTK and is skipped without a display.

#[cfg(test)]
mod window_tests;
#[cfg(test)]
mod control_tests;
#[cfg(test)]
mod view_tests;
