//! Text labels drawn over node shapes.

use svg::node::element as svg_element;

use crate::{color::Color, geometry::Point};

/// Font settings shared by every label of a diagram.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_size: u16,
    color: Color,
    baseline_offset: f32,
}

impl TextDefinition {
    /// Creates a text definition.
    ///
    /// # Arguments
    ///
    /// * `font_size` - Font size in pixels
    /// * `color` - Fill color of the glyphs
    /// * `baseline_offset` - Distance the baseline is pushed below the anchor
    ///   point, so a label anchored at a shape's center reads centered
    pub fn new(font_size: u16, color: Color, baseline_offset: f32) -> Self {
        Self {
            font_size,
            color,
            baseline_offset,
        }
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn baseline_offset(&self) -> f32 {
        self.baseline_offset
    }

    pub fn set_font_size(&mut self, font_size: u16) {
        self.font_size = font_size;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new(
            14,
            Color::new("#292929").expect("'#292929' is a valid CSS color"),
            5.0,
        )
    }
}

/// A single line of text horizontally centered on an anchor point.
#[derive(Debug, Clone)]
pub struct Text {
    definition: TextDefinition,
    content: String,
}

impl Text {
    pub fn new(definition: TextDefinition, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }

    /// Renders the text centered on `anchor`.
    pub fn render_centered(&self, anchor: Point) -> svg_element::Text {
        svg_element::Text::new(self.content.as_str())
            .set("x", anchor.x())
            .set("y", anchor.y() + self.definition.baseline_offset())
            .set("font-size", self.definition.font_size())
            .set("text-anchor", "middle")
            .set("fill", self.definition.color().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_default() {
        let def = TextDefinition::default();
        assert_eq!(def.font_size(), 14);
        assert_eq!(def.baseline_offset(), 5.0);
    }

    #[test]
    fn test_render_centered() {
        let text = Text::new(TextDefinition::default(), "UserA");
        let rendered = text.render_centered(Point::new(400.0, 75.0)).to_string();

        assert!(rendered.contains(r#"x="400""#));
        assert!(rendered.contains(r#"y="80""#));
        assert!(rendered.contains(r#"font-size="14""#));
        assert!(rendered.contains(r#"text-anchor="middle""#));
        assert!(rendered.contains("UserA"));
    }
}
