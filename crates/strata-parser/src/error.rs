//! Diagnostic side channel for the Strata parser.
//!
//! Parsing never fails: malformed lines are dropped. Every dropped line is
//! described by a warning [`Diagnostic`] so callers that care can report
//! it, while callers that don't simply ignore the list.
//!
//! # Example
//!
//! ```
//! # use strata_parser::error::{Diagnostic, ErrorCode, Severity};
//! # use strata_parser::Span;
//!
//! let diag = Diagnostic::warning("node line has no ` - ` separator")
//!     .with_code(ErrorCode::W003)
//!     .with_label(Span::new(16..24), "expected `TYPE - label`")
//!     .with_help("write nodes as `LAYER1 - UserA`");
//!
//! assert_eq!(diag.severity(), Severity::Warning);
//! ```

mod diagnostic;
mod error_code;
mod label;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
