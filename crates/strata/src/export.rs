//! Output formats for rendered diagrams.
//!
//! [`svg`] assembles the self-contained SVG document; [`html`] wraps a
//! rendered document for embedding or download.

pub mod html;
pub mod svg;
