//! CLI logic for the Strata diagram tool.
//!
//! Reads one or more input files, renders them as a single diagram and
//! writes the result in the requested format.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};
pub use config::ConfigError;

use std::fs;

use log::{info, warn};
use miette::GraphicalReportHandler;

use strata::{DiagramBuilder, StrataError};
use strata_parser::error::Diagnostic;

/// Joins the contents of several input files into one source text.
///
/// Blocks are separated by a newline so a section header at the start of
/// one file never merges with the last line of the previous one.
pub fn join_inputs(sources: &[String]) -> String {
    sources.join("\n")
}

/// Run the Strata CLI application
///
/// Parser warnings are reported through the log at `warn` level and never
/// stop the run.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StrataError` for:
/// - File I/O errors
/// - Configuration loading errors
pub fn run(args: &Args) -> Result<(), StrataError> {
    info!(
        inputs:? = args.input,
        output_path = args.output,
        format:? = args.format;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let sources = args
        .input
        .iter()
        .map(fs::read_to_string)
        .collect::<Result<Vec<_>, _>>()?;
    let source = join_inputs(&sources);

    let builder = DiagramBuilder::new(app_config);
    let (diagram, diagnostics) = builder.parse_with_diagnostics(&source).into_parts();
    report_warnings(&diagnostics, &source);

    let content = match args.format {
        OutputFormat::Svg => builder.render_svg(&diagram),
        OutputFormat::Html => builder.render_html(&diagram),
        OutputFormat::DataUri => builder.render_data_uri(&diagram),
    };

    fs::write(&args.output, content)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}

fn report_warnings(diagnostics: &[Diagnostic], source: &str) {
    if diagnostics.is_empty() {
        return;
    }

    let reporter = GraphicalReportHandler::new();
    for reportable in error_adapter::diagnostics_to_reportables(diagnostics, source) {
        let mut writer = String::new();
        match reporter.render_report(&mut writer, &reportable) {
            Ok(()) => warn!("{writer}"),
            Err(_) => warn!("{reportable}"),
        }
    }

    warn!(count = diagnostics.len(); "Some input lines were ignored");
}
