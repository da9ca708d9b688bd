//! Tier theme: the shape and colours each tier's nodes are drawn with.

use strata_core::{
    color::Color,
    draw::{NodeBox, NodeShape, ShapeDefinition, StrokeDefinition, Text, TextDefinition},
    geometry::Size,
    semantic::Tier,
};

const NODE_STROKE_WIDTH: f32 = 3.0;
const ROUNDED_RADIUS: f32 = 15.0;

/// Fill, stroke and shape of one tier.
struct TierTheme {
    fill: &'static str,
    stroke: &'static str,
    shape: NodeShape,
}

fn tier_theme(tier: Tier) -> TierTheme {
    let (fill, stroke, shape) = match tier.number() {
        1 => ("#FFEBEE", "#D32F2F", NodeShape::rectangle()),
        2 => ("#E3F2FD", "#2196F3", NodeShape::rounded(ROUNDED_RADIUS)),
        3 => ("#F1F8E9", "#7CB342", NodeShape::Ellipse),
        4 => ("#FFF3E0", "#EF6C00", NodeShape::rectangle()),
        _ => ("#E8F5E9", "#388E3C", NodeShape::rectangle()),
    };

    TierTheme {
        fill,
        stroke,
        shape,
    }
}

/// Shape definition for nodes of `tier`.
pub fn shape_definition(tier: Tier) -> ShapeDefinition {
    let theme = tier_theme(tier);
    let fill = Color::new(theme.fill).unwrap_or_default();
    let stroke = Color::new(theme.stroke).unwrap_or_default();

    ShapeDefinition::new(
        theme.shape,
        fill,
        StrokeDefinition::solid(stroke, NODE_STROKE_WIDTH),
    )
}

/// A drawable node box for `label` in `tier`.
pub fn node_box(tier: Tier, label: &str, size: Size, font_size: u16) -> NodeBox {
    let mut text = TextDefinition::default();
    text.set_font_size(font_size);
    NodeBox::new(shape_definition(tier), size, Text::new(text, label))
}

#[cfg(test)]
mod tests {
    use strata_core::{
        draw::{Drawable, RenderLayer},
        geometry::Point,
    };

    use super::*;

    fn render(tier: u32) -> String {
        let node = node_box(Tier::new(tier), "Web", Size::new(120.0, 50.0), 14);
        node.render_to_layers(Point::new(340.0, 250.0))
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_tier_shapes() {
        assert_eq!(shape_definition(Tier::new(3)).shape(), NodeShape::Ellipse);
        assert_eq!(
            shape_definition(Tier::new(2)).shape(),
            NodeShape::rounded(ROUNDED_RADIUS)
        );
        for tier in [1, 4, 5] {
            assert_eq!(shape_definition(Tier::new(tier)).shape(), NodeShape::rectangle());
        }
    }

    #[test]
    fn test_tier_colors() {
        let definition = shape_definition(Tier::new(1));
        assert_eq!(definition.fill(), Color::new("#FFEBEE").unwrap());
        assert_eq!(definition.stroke().color(), Color::new("#D32F2F").unwrap());
        assert_eq!(definition.stroke().width(), NODE_STROKE_WIDTH);
    }

    #[test]
    fn test_ellipse_rendering() {
        let svg = render(3);

        assert!(svg.contains("<ellipse"));
        assert!(svg.contains(r#"cx="400""#));
        assert!(svg.contains(r#"cy="275""#));
        assert!(svg.contains(r#"rx="60""#));
        assert!(svg.contains(r#"ry="25""#));
    }

    #[test]
    fn test_label_centred() {
        let node = node_box(Tier::new(1), "UserA", Size::new(120.0, 50.0), 14);
        let output = node.render_to_layers(Point::new(340.0, 50.0));
        assert_eq!(output.layer_len(RenderLayer::Label), 1);

        let svg: String = output.render().iter().map(|node| node.to_string()).collect();
        assert!(svg.contains(r#"x="400""#));
        assert!(svg.contains(r#"y="80""#));
        assert!(svg.contains(r#"font-size="14""#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains("UserA"));
    }
}
