//! SVG document assembly.
//!
//! The document has a fixed canvas, a `<defs>` block, then one group per
//! render layer: edges, node shapes, labels.

mod defs;
mod edges;
mod nodes;

pub use edges::Edge;

use log::{debug, trace, warn};
use svg::Document;

use strata_core::{
    color::Color,
    draw::{Drawable, LayeredOutput},
    geometry::Size,
    semantic::Diagram,
};

use crate::{
    config::{AppConfig, LayoutConfig, PALETTE},
    layout::{Layout, Route},
};

/// Builder for an [`Svg`] renderer.
pub struct SvgBuilder<'a> {
    config: &'a AppConfig,
}

impl<'a> SvgBuilder<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Resolves the configuration into a renderer.
    ///
    /// An unusable palette is replaced by the default one.
    pub fn build(self) -> Svg {
        let style = self.config.style();
        let palette = style.palette().unwrap_or_else(|err| {
            warn!(err = err.as_str(); "Falling back to the default palette");
            default_palette()
        });

        Svg {
            layout: self.config.layout().clone(),
            palette,
            sweep_secs: style.sweep_secs().max(1),
            font_size: style.font_size(),
        }
    }
}

fn default_palette() -> Vec<Color> {
    PALETTE
        .iter()
        .filter_map(|color| Color::new(color).ok())
        .collect()
}

/// Renders diagrams to SVG documents.
#[derive(Debug, Clone)]
pub struct Svg {
    layout: LayoutConfig,
    palette: Vec<Color>,
    sweep_secs: u32,
    font_size: u16,
}

impl Svg {
    /// Renders `diagram` to a complete document.
    pub fn render(&self, diagram: &Diagram) -> Document {
        let layout = Layout::new(diagram, &self.layout);

        let mut output = self.render_connections(diagram, &layout);
        output.merge(self.render_nodes(&layout));

        let (width, height) = (self.layout.canvas_width(), self.layout.canvas_height());
        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"))
            .add(defs::create_definitions(self.sweep_secs));

        for group in output.render() {
            doc = doc.add(group);
        }

        doc
    }

    fn render_nodes(&self, layout: &Layout<'_>) -> LayeredOutput {
        let size = Size::new(self.layout.node_width(), self.layout.node_height());
        let mut output = LayeredOutput::new();

        for placed in layout.iter() {
            let node = nodes::node_box(placed.tier(), placed.label(), size, self.font_size);
            output.merge(node.render_to_layers(placed.position()));
        }

        output
    }

    /// Renders every connection whose endpoints are both placed.
    ///
    /// Colours are taken from the palette in order, one per drawn edge.
    fn render_connections(&self, diagram: &Diagram, layout: &Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let mut colors = self.palette.iter().cycle();
        let mut skipped = 0usize;

        for connection in diagram.connections() {
            let (Some(source), Some(target)) =
                (layout.get(connection.source()), layout.get(connection.target()))
            else {
                warn!(
                    source = connection.source(),
                    target = connection.target();
                    "Skipping connection with an undeclared or unplaced endpoint"
                );
                skipped += 1;
                continue;
            };

            let style = connection.style();
            let route = Route::new(source, target, style.family(), &self.layout);
            let color = colors.next().copied().unwrap_or_default();
            let highlighted = diagram.is_highlighted(connection);

            trace!(
                source = connection.source(),
                target = connection.target(),
                family = style.family().name(),
                highlighted = highlighted;
                "Rendering connection"
            );

            output.merge(Edge::new(route, style, color, highlighted).render());
        }

        debug!(
            drawn = diagram.connections().len() - skipped,
            skipped = skipped;
            "Connections rendered"
        );

        output
    }
}

#[cfg(test)]
mod tests {
    use strata_core::{
        connector::Connector,
        semantic::{AnimationPair, Connection, Node},
    };

    use super::*;
    use crate::config::StyleConfig;

    fn diagram() -> Diagram {
        let mut diagram = Diagram::default();
        diagram.push_node(Node::new("LAYER1", "A"));
        diagram.push_node(Node::new("LAYER2", "B"));
        diagram.push_node(Node::new("LAYER3", "C"));
        diagram
    }

    fn render(diagram: &Diagram) -> String {
        SvgBuilder::new(&AppConfig::default())
            .build()
            .render(diagram)
            .to_string()
    }

    #[test]
    fn test_document_frame() {
        let svg = render(&Diagram::default());

        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"height="600""#));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.contains("<defs>"));
        assert!(!svg.contains("data-layer"));
    }

    #[test]
    fn test_layer_order() {
        let mut diagram = diagram();
        diagram.push_connection(Connection::new("A", "B", Connector::WaveArrow));
        let svg = render(&diagram);

        let defs = svg.find("<defs>").unwrap();
        let edges = svg.find(r#"data-layer="edges""#).unwrap();
        let nodes = svg.find(r#"data-layer="nodes""#).unwrap();
        let labels = svg.find(r#"data-layer="labels""#).unwrap();
        assert!(defs < edges && edges < nodes && nodes < labels);
    }

    #[test]
    fn test_palette_cycles_over_drawn_edges() {
        let mut diagram = diagram();
        diagram.push_connection(Connection::new("A", "B", Connector::To));
        diagram.push_connection(Connection::new("A", "Ghost", Connector::To));
        diagram.push_connection(Connection::new("B", "C", Connector::To));
        let svg = render(&diagram);

        let first = Color::new(PALETTE[0]).unwrap().to_string();
        let second = Color::new(PALETTE[1]).unwrap().to_string();
        let third = Color::new(PALETTE[2]).unwrap().to_string();

        assert_eq!(svg.matches("<line ").count(), 2);
        assert!(svg.contains(&format!(r#"stroke="{first}""#)));
        assert!(svg.contains(&format!(r#"stroke="{second}""#)));
        assert!(!svg.contains(&format!(r#"stroke="{third}""#)));
    }

    #[test]
    fn test_strokes_are_plain_hex() {
        let mut diagram = diagram();
        diagram.push_connection(Connection::new("A", "B", Connector::WaveArrow));
        let svg = render(&diagram);

        let base = svg
            .split('<')
            .find(|element| element.contains(r#"stroke-opacity="0.05""#))
            .unwrap();
        assert!(base.contains(r##"stroke="#EEEEEE""##));
        assert!(svg.contains(r##"stroke="#FF6B6B""##));
        assert!(!svg.contains("color(srgb"));
        assert!(!svg.contains("rgb("));
    }

    #[test]
    fn test_palette_wraps() {
        let mut diagram = diagram();
        for _ in 0..11 {
            diagram.push_connection(Connection::new("A", "B", Connector::To));
        }
        let svg = render(&diagram);

        let first = Color::new(PALETTE[0]).unwrap().to_string();
        assert_eq!(svg.matches(&format!(r#"stroke="{first}""#)).count(), 2);
    }

    #[test]
    fn test_symmetric_highlight() {
        let mut diagram = diagram();
        diagram.push_connection(Connection::new("A", "B", Connector::DashArrow));
        diagram.push_animation(AnimationPair::new("B", "A"));
        let svg = render(&diagram);

        assert_eq!(svg.matches(r#"data-highlighted="true""#).count(), 1);
    }

    #[test]
    fn test_invalid_palette_falls_back() {
        let style = StyleConfig::new(vec!["nope".to_string()], 8, 14);
        let config = AppConfig::new(LayoutConfig::default(), style);

        let mut diagram = diagram();
        diagram.push_connection(Connection::new("A", "B", Connector::To));
        let svg = SvgBuilder::new(&config).build().render(&diagram).to_string();

        let first = Color::new(PALETTE[0]).unwrap().to_string();
        assert!(svg.contains(&format!(r#"stroke="{first}""#)));
    }

    #[test]
    fn test_custom_canvas() {
        let layout = LayoutConfig::default().with_canvas(1000.0, 700.0);
        let config = AppConfig::new(layout, StyleConfig::default());
        let svg = SvgBuilder::new(&config).build().render(&diagram()).to_string();

        assert!(svg.contains(r#"viewBox="0 0 1000 700""#));
        // Single tier 1 node centred on the wider canvas
        assert!(svg.contains(r#"x="440""#));
    }
}
