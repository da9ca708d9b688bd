//! Warning codes for the Strata diagnostic system.

use std::fmt;

/// Codes identifying why a line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Line outside any known section.
    ///
    /// The line appears before the first section header, or inside a
    /// section whose name was not recognised.
    W001,

    /// Unrecognised section header.
    ///
    /// Only `[diagram nodes]`, `[diagram connection]` and `[animation]`
    /// are known. Lines under an unknown header are ignored.
    W002,

    /// Node line without separator.
    ///
    /// Node lines must contain ` - ` between the type tag and the label.
    W003,

    /// Missing connector symbol.
    ///
    /// A connection or animation line contains none of the connector
    /// symbols.
    W004,

    /// Duplicate node label.
    ///
    /// Labels identify nodes; the first declaration is the one laid out.
    W005,
}

impl ErrorCode {
    /// Returns the code as a string slice, e.g. `"W003"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W001 => "W001",
            ErrorCode::W002 => "W002",
            ErrorCode::W003 => "W003",
            ErrorCode::W004 => "W004",
            ErrorCode::W005 => "W005",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
