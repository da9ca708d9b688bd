//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Parsing never fails, so every diagnostic reports a line that was
/// dropped or ignored while parsing continued past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
        }
    }
}
