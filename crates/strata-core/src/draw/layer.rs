//! Layer-based rendering system for SVG output.
//!
//! Drawables specify which z-order layer each of their SVG elements belongs
//! to. The renderer collects everything in a [`LayeredOutput`] and emits one
//! `<g data-layer="…">` group per non-empty layer, bottom to top.
//!
//! # Example
//!
//! ```
//! # use strata_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Text};
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Label, Box::new(Text::new("UserA")));
//! output.add_to_layer(RenderLayer::Edge, Box::new(Line::new()));
//!
//! // Edge group first, label group last
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in variant declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Connection paths and lines - renders first
    Edge,
    /// Node shapes
    Node,
    /// Node labels
    Label,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edge => "edges",
            Self::Node => "nodes",
            Self::Label => "labels",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// Nodes added to the same layer keep their insertion order, so a faint
/// base stroke added before its coloured overlay stays underneath it.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes collected for `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
