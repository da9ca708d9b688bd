//! Node shapes.
//!
//! A [`ShapeDefinition`] pairs a [`NodeShape`] with its fill and stroke;
//! a [`NodeBox`] is a sized shape with a centered label, the drawable the
//! renderer places once per positioned node.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text},
    geometry::{Point, Size},
};

/// Outline of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeShape {
    /// Rectangle with optionally rounded corners (`corner_radius` 0 is square)
    Rectangle { corner_radius: f32 },
    /// Ellipse inscribed in the node box
    Ellipse,
}

impl NodeShape {
    /// A square-cornered rectangle.
    pub fn rectangle() -> Self {
        Self::Rectangle { corner_radius: 0.0 }
    }

    /// A rectangle with rounded corners.
    pub fn rounded(corner_radius: f32) -> Self {
        Self::Rectangle { corner_radius }
    }
}

/// Visual definition of a node shape.
#[derive(Debug, Clone)]
pub struct ShapeDefinition {
    shape: NodeShape,
    fill: Color,
    stroke: StrokeDefinition,
}

impl ShapeDefinition {
    pub fn new(shape: NodeShape, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            shape,
            fill,
            stroke,
        }
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Renders the shape occupying the box at `top_left` with the given size.
    pub fn render_to_svg(&self, size: Size, top_left: Point) -> Box<dyn svg::Node> {
        let bounds = top_left.to_bounds(size);

        match self.shape {
            NodeShape::Ellipse => {
                let center = bounds.center();
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("rx", size.width() / 2.0)
                    .set("ry", size.height() / 2.0)
                    .set("fill", self.fill.to_string());
                Box::new(apply_stroke!(ellipse, &self.stroke))
            }
            NodeShape::Rectangle { corner_radius } => {
                let rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("rx", corner_radius)
                    .set("fill", self.fill.to_string());
                Box::new(apply_stroke!(rect, &self.stroke))
            }
        }
    }
}

/// A node shape of fixed size with a label centered inside it.
#[derive(Debug, Clone)]
pub struct NodeBox {
    definition: ShapeDefinition,
    size: Size,
    label: Text,
}

impl NodeBox {
    pub fn new(definition: ShapeDefinition, size: Size, label: Text) -> Self {
        Self {
            definition,
            size,
            label,
        }
    }
}

impl Drawable for NodeBox {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        output.add_to_layer(
            RenderLayer::Node,
            self.definition.render_to_svg(self.size, position),
        );

        let center = position.to_bounds(self.size).center();
        output.add_to_layer(
            RenderLayer::Label,
            Box::new(self.label.render_centered(center)),
        );

        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::TextDefinition;

    fn definition(shape: NodeShape) -> ShapeDefinition {
        ShapeDefinition::new(
            shape,
            Color::new("#F1F8E9").unwrap(),
            StrokeDefinition::solid(Color::new("#7CB342").unwrap(), 3.0),
        )
    }

    #[test]
    fn test_render_ellipse() {
        let svg = definition(NodeShape::Ellipse)
            .render_to_svg(Size::new(120.0, 50.0), Point::new(100.0, 250.0))
            .to_string();

        assert!(svg.starts_with("<ellipse"));
        assert!(svg.contains(r#"cx="160""#));
        assert!(svg.contains(r#"cy="275""#));
        assert!(svg.contains(r#"rx="60""#));
        assert!(svg.contains(r#"ry="25""#));
        assert!(svg.contains(r#"stroke-width="3""#));
    }

    #[test]
    fn test_render_rounded_rectangle() {
        let svg = definition(NodeShape::rounded(15.0))
            .render_to_svg(Size::new(120.0, 50.0), Point::new(340.0, 150.0))
            .to_string();

        assert!(svg.starts_with("<rect"));
        assert!(svg.contains(r#"x="340""#));
        assert!(svg.contains(r#"y="150""#));
        assert!(svg.contains(r#"rx="15""#));
        assert!(svg.contains(r#"width="120""#));
    }

    #[test]
    fn test_node_box_layers() {
        let node = NodeBox::new(
            definition(NodeShape::rectangle()),
            Size::new(120.0, 50.0),
            Text::new(TextDefinition::default(), "DBServerA"),
        );
        let output = node.render_to_layers(Point::new(0.0, 475.0));

        assert_eq!(output.layer_len(RenderLayer::Node), 1);
        assert_eq!(output.layer_len(RenderLayer::Label), 1);
        assert_eq!(output.layer_len(RenderLayer::Edge), 0);
        assert_eq!(node.size(), Size::new(120.0, 50.0));
    }
}
