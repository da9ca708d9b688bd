//! Drawable Components for Diagram Rendering
//!
//! This module provides drawable abstractions for the nodes of a Strata
//! diagram together with the stroke and layer plumbing the renderer uses
//! for connections. All drawables implement the [`Drawable`] trait, which
//! renders to layered SVG output.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered
//! during final SVG generation so that nodes always sit above edges and
//! labels above nodes.

mod layer;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{NodeBox, NodeShape, ShapeDefinition};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// # Arguments
    ///
    /// * `position` - The top-left corner where this drawable should be rendered
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
