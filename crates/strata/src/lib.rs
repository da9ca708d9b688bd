//! Strata - tiered architecture diagrams with animated connections.
//!
//! Parsing, layout and rendering for the Strata diagram language: a small
//! sectioned text format listing nodes by tier, the connections between
//! them, and which connections to highlight. Rendering produces a single
//! self-contained SVG document.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use strata_core::{color, connector, draw, geometry, semantic};
pub use strata_parser::Parsed;

pub use error::StrataError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{html, svg::SvgBuilder};

/// Builder for parsing and rendering Strata diagrams.
///
/// # Examples
///
/// ```rust
/// use strata::{DiagramBuilder, config::AppConfig};
///
/// let source = "[diagram nodes]\nLAYER1 - A\nLAYER2 - B\n[diagram connection]\nA ~> B\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source);
/// let svg = builder.render_svg(&diagram);
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a semantic diagram.
    ///
    /// Malformed lines are dropped; use [`parse_with_diagnostics`](Self::parse_with_diagnostics)
    /// to find out which.
    pub fn parse(&self, source: &str) -> semantic::Diagram {
        self.parse_with_diagnostics(source).into_diagram()
    }

    /// Parse source text, keeping a warning for every dropped line.
    pub fn parse_with_diagnostics(&self, source: &str) -> Parsed {
        info!("Parsing diagram");

        let parsed = strata_parser::parse_with_diagnostics(source);

        debug!(
            nodes = parsed.diagram().nodes().len(),
            connections = parsed.diagram().connections().len(),
            animations = parsed.diagram().animations().len(),
            warnings = parsed.diagnostics().len();
            "Diagram parsed"
        );
        trace!(diagram:? = parsed.diagram(); "Parsed diagram");

        parsed
    }

    /// Render a semantic diagram to an SVG string.
    ///
    /// Connections whose endpoints were never placed are left out; the
    /// result is always a complete document.
    pub fn render_svg(&self, diagram: &semantic::Diagram) -> String {
        info!("Rendering diagram");

        let svg = SvgBuilder::new(&self.config)
            .build()
            .render(diagram)
            .to_string();

        info!(bytes = svg.len(); "SVG rendered successfully");
        svg
    }

    /// Render a semantic diagram to an HTML page embedding the SVG.
    pub fn render_html(&self, diagram: &semantic::Diagram) -> String {
        let layout = self.config.layout();
        html::wrap_html(
            &self.render_svg(diagram),
            layout.canvas_width(),
            layout.canvas_height(),
        )
    }

    /// Render a semantic diagram to a base64 `data:` URI.
    pub fn render_data_uri(&self, diagram: &semantic::Diagram) -> String {
        html::svg_data_uri(&self.render_svg(diagram))
    }

    /// Render a semantic diagram to an HTML anchor downloading the SVG.
    pub fn render_download_link(&self, diagram: &semantic::Diagram) -> String {
        html::download_link(&self.render_svg(diagram))
    }

    /// Parse and render `source` in one step.
    pub fn source_to_svg(&self, source: &str) -> String {
        self.render_svg(&self.parse(source))
    }
}
