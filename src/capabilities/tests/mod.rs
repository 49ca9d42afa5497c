//! Capability trait tests
//!
//! Contains test suites for the interface traits:
//! - FileChooser behaving the same on the dialog and the embedded widget
//! - Editable and CellEditable through Entry
//! - Scrollable through TextView
//! - Buildable ids
//!
//! Every test here needs GTK and is skipped without a display.

#[cfg(test)]
mod editable_tests;
#[cfg(test)]
mod scrollable_tests;
