//! # Strata Parser
//!
//! Parser for the Strata architecture diagram text format. The format is
//! line oriented and split into sections:
//!
//! ```text
//! [diagram nodes]
//! LAYER1 - UserA
//! LAYER2 - CloudfrontA
//! [diagram connection]
//! UserA to> CloudfrontA
//! [animation]
//! UserA to> CloudfrontA
//! ```
//!
//! Parsing never fails. Lines that cannot be understood are dropped; the
//! reason for every drop is available from [`parse_with_diagnostics`].
//!
//! ## Usage
//!
//! ```
//! let diagram = strata_parser::parse("[diagram nodes]\nLAYER1 - UserA\n");
//! assert_eq!(diagram.nodes().len(), 1);
//! assert_eq!(diagram.nodes()[0].label(), "UserA");
//! ```

pub mod error;

mod lexer;
mod parser;
mod span;

pub use span::Span;

use log::debug;

use strata_core::semantic::Diagram;

use error::Diagnostic;

/// The result of parsing: the diagram plus a warning for every dropped line.
#[derive(Debug, Clone)]
pub struct Parsed {
    diagram: Diagram,
    diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    fn new(diagram: Diagram, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagram,
            diagnostics,
        }
    }

    /// The parsed diagram.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Diagnostics for skipped lines, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any line was skipped.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Consumes the result, discarding diagnostics.
    pub fn into_diagram(self) -> Diagram {
        self.diagram
    }

    /// Consumes the result into its parts.
    pub fn into_parts(self) -> (Diagram, Vec<Diagnostic>) {
        (self.diagram, self.diagnostics)
    }
}

/// Parse diagram text.
///
/// Equivalent to [`parse_with_diagnostics`] with the diagnostics dropped.
pub fn parse(source: &str) -> Diagram {
    parse_with_diagnostics(source).into_diagram()
}

/// Parse diagram text, keeping a warning for every skipped line.
///
/// # Example
///
/// ```
/// use strata_parser::{error::ErrorCode, parse_with_diagnostics};
///
/// let parsed = parse_with_diagnostics("[diagram nodes]\nLAYER1 UserA\n");
///
/// assert!(parsed.diagram().nodes().is_empty());
/// assert_eq!(parsed.diagnostics()[0].code(), Some(ErrorCode::W003));
/// ```
pub fn parse_with_diagnostics(source: &str) -> Parsed {
    let parsed = parser::Builder::new().build(source);

    debug!(
        nodes = parsed.diagram.nodes().len(),
        connections = parsed.diagram.connections().len(),
        animations = parsed.diagram.animations().len(),
        skipped = parsed.diagnostics.len();
        "Diagram text parsed"
    );

    parsed
}
