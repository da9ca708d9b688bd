//! Configuration types for Strata diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] and
//! every field falls back to the built-in default when omitted, so a partial
//! TOML file only needs the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas, node and connection-routing dimensions.
//! - [`StyleConfig`] - Edge palette, gradient sweep period and label font size.
//!
//! # Example
//!
//! ```
//! # use strata::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.style().palette().unwrap().len(), 10);
//! ```

use serde::Deserialize;

use strata_core::color::Color;

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Default node width in pixels.
pub const NODE_WIDTH: f32 = 120.0;
/// Default node height in pixels.
pub const NODE_HEIGHT: f32 = 50.0;
/// Default gap between tiers and between nodes of one tier.
pub const GAP: f32 = 50.0;

/// Fraction of a vertical connection's height used to lift its curve.
pub const CURVE_FACTOR: f32 = 0.5;
/// Lower bound of the vertical curve lift.
pub const CURVE_MIN: f32 = 30.0;
/// Upper bound of the vertical curve lift.
pub const CURVE_MAX: f32 = 60.0;
/// Horizontal control offset of a curved same-tier or upward connection.
pub const BULGE_X: f32 = 100.0;
/// Upward control offset of a curved same-tier or upward connection.
pub const BULGE_Y: f32 = 60.0;
/// Vertical control offset of the non-curved families.
pub const BEND: f32 = 50.0;

/// Default edge palette, cycled in connection order.
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#77CC6D", "#9A94BC",
    "#FF9F89", "#83E8BA",
];
/// Default period of the travelling gradient sweep, in seconds.
pub const SWEEP_SECS: u32 = 8;
/// Default label font size.
pub const FONT_SIZE: u16 = 14;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Canvas and routing dimensions.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks that every value can be used for rendering.
    ///
    /// Rendering never fails on a bad configuration; it substitutes defaults
    /// instead. Front ends call this to reject such a configuration up front.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Canvas, node and routing dimensions, all in SVG user units.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    canvas_width: f32,
    canvas_height: f32,
    node_width: f32,
    node_height: f32,
    gap: f32,
    curve_factor: f32,
    curve_min: f32,
    curve_max: f32,
    bulge_x: f32,
    bulge_y: f32,
    bend: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            gap: GAP,
            curve_factor: CURVE_FACTOR,
            curve_min: CURVE_MIN,
            curve_max: CURVE_MAX,
            bulge_x: BULGE_X,
            bulge_y: BULGE_Y,
            bend: BEND,
        }
    }
}

impl LayoutConfig {
    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn curve_factor(&self) -> f32 {
        self.curve_factor
    }

    pub fn curve_min(&self) -> f32 {
        self.curve_min
    }

    pub fn curve_max(&self) -> f32 {
        self.curve_max
    }

    pub fn bulge_x(&self) -> f32 {
        self.bulge_x
    }

    pub fn bulge_y(&self) -> f32 {
        self.bulge_y
    }

    pub fn bend(&self) -> f32 {
        self.bend
    }

    /// Returns a copy with a different canvas size.
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Returns a copy with a different node size.
    pub fn with_node_size(mut self, width: f32, height: f32) -> Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    /// Returns a copy with a different gap.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    fn validate(&self) -> Result<(), String> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("node_width", self.node_width),
            ("node_height", self.node_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("layout.{name} must be a positive number, got {value}"));
            }
        }

        let non_negative = [
            ("gap", self.gap),
            ("curve_factor", self.curve_factor),
            ("curve_min", self.curve_min),
            ("curve_max", self.curve_max),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("layout.{name} must not be negative, got {value}"));
            }
        }

        if self.curve_min > self.curve_max {
            return Err(format!(
                "layout.curve_min ({}) is larger than layout.curve_max ({})",
                self.curve_min, self.curve_max
            ));
        }

        for (name, value) in [
            ("bulge_x", self.bulge_x),
            ("bulge_y", self.bulge_y),
            ("bend", self.bend),
        ] {
            if !value.is_finite() {
                return Err(format!("layout.{name} must be finite, got {value}"));
            }
        }

        Ok(())
    }
}

/// Visual styling of edges and labels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Edge colors as CSS color strings.
    palette: Vec<String>,

    /// Period of the gradient sweep over curved and straight edges.
    sweep_secs: u32,

    /// Label font size.
    font_size: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.iter().map(|color| (*color).to_string()).collect(),
            sweep_secs: SWEEP_SECS,
            font_size: FONT_SIZE,
        }
    }
}

impl StyleConfig {
    /// Creates a style configuration from its parts.
    pub fn new(palette: Vec<String>, sweep_secs: u32, font_size: u16) -> Self {
        Self {
            palette,
            sweep_secs,
            font_size,
        }
    }

    /// Returns the parsed edge palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or an entry is not a valid
    /// CSS color.
    pub fn palette(&self) -> Result<Vec<Color>, String> {
        if self.palette.is_empty() {
            return Err("style.palette must contain at least one color".to_string());
        }

        self.palette
            .iter()
            .map(|color| Color::new(color))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid palette color in config: {err}"))
    }

    pub fn sweep_secs(&self) -> u32 {
        self.sweep_secs
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    fn validate(&self) -> Result<(), String> {
        self.palette()?;

        if self.sweep_secs == 0 {
            return Err("style.sweep_secs must be at least 1".to_string());
        }
        if self.font_size == 0 {
            return Err("style.font_size must be at least 1".to_string());
        }

        Ok(())
    }
}
