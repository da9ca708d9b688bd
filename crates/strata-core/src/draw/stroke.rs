//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width and dash pattern of a stroke
//! - [`StrokeStyle`]: line pattern (solid or dashed)
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#FF6B6B"`, `0.05` |
//! | `width` | `stroke-width` | `2` |
//! | `style` | `stroke-dasharray` | `"5,5"` |
//!
//! `stroke-opacity` is only written for translucent colors.

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use strata_core::draw::{StrokeDefinition, StrokeStyle};
/// use strata_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("#D32F2F").unwrap(), 3.0);
/// assert_eq!(*stroke.style(), StrokeStyle::Solid);
///
/// let dashed = StrokeDefinition::dashed(Color::new("#45B7D1").unwrap(), 2.0);
/// assert_eq!(dashed.style().to_svg_value().as_deref(), Some("5,5"));
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the opacity to emit as `stroke-opacity`, if the color is translucent.
    pub fn opacity(&self) -> Option<f32> {
        let alpha = self.color.alpha();
        (alpha < 1.0).then_some(alpha)
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use strata_core::draw::StrokeDefinition;
/// use strata_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::dashed(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0);
///
/// let line = strata_core::apply_stroke!(line, &stroke);
/// assert!(line.to_string().contains(r#"stroke-dasharray="5,5""#));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width());

        if let Some(opacity) = $stroke.opacity() {
            elem = elem.set("stroke-opacity", opacity);
        }

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element::Line;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "#000000");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.opacity(), None);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
    }

    #[test]
    fn test_translucent_stroke_has_opacity() {
        let stroke = StrokeDefinition::new(Color::new("#EEEEEE").unwrap().with_alpha(0.05), 2.0);
        let opacity = stroke.opacity().unwrap();
        assert!((opacity - 0.05).abs() < 0.001);
    }

    #[test]
    fn test_apply_stroke_attributes() {
        let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 3.0);
        let line = crate::apply_stroke!(Line::new(), &stroke).to_string();

        assert!(line.contains(r##"stroke="#000000""##));
        assert!(line.contains(r#"stroke-width="3""#));
        assert!(!line.contains("stroke-opacity"));
        assert!(!line.contains("stroke-dasharray"));
    }
}
