//! Strata Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Strata parser
//! and renderer. It includes:
//!
//! - **Semantic**: The parsed diagram model ([`semantic`] module)
//! - **Connectors**: Connector symbols and their visual styles ([`connector`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Strokes, node shapes and layered SVG output ([`draw`] module)

pub mod color;
pub mod connector;
pub mod draw;
pub mod geometry;
pub mod semantic;
