//! Connection rendering, one branch per curve family.

use svg::node::element::{Animate, Line, Path};

use strata_core::{
    apply_stroke,
    color::Color,
    connector::{ConnectorStyle, CurveFamily},
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
};

use super::defs::{self, ANIMATED_LINE_CLASS, ARROW_ID, MASK_ID};
use crate::layout::Route;

/// Width of the coloured stroke of curved edges.
const CURVED_WIDTH: f32 = 3.0;
/// Width of every other edge stroke, including the faint base stroke.
const LINE_WIDTH: f32 = 2.0;
/// Opacity of the static base stroke under arrowed curves and lines.
const BASE_OPACITY: f32 = 0.05;
const BASE_COLOR: &str = "#EEEEEE";
/// Extra width at the peak of a highlight pulse.
const HIGHLIGHT_GROWTH: f32 = 2.0;
/// Distance the dash pattern travels per period of a dashed edge.
const DASH_TRAVEL: u32 = 20;

macro_rules! with_arrow {
    ($element:expr, $arrow:expr) => {{
        let elem = $element;
        if $arrow {
            elem.set("marker-end", defs::url(ARROW_ID))
        } else {
            elem
        }
    }};
}

macro_rules! with_pulse {
    ($element:expr, $style:expr) => {{
        let elem = $element;
        match $style.period_secs() {
            Some(period) => elem.add(opacity_pulse(period)),
            None => elem,
        }
    }};
}

macro_rules! with_highlight {
    ($element:expr, $edge:expr, $width:expr) => {{
        let elem = $element;
        if $edge.highlighted {
            elem.set("data-highlighted", "true").add(width_pulse($width))
        } else {
            elem
        }
    }};
}

/// Everything needed to draw one routed connection.
#[derive(Debug, Clone)]
pub struct Edge {
    route: Route,
    style: ConnectorStyle,
    color: Color,
    highlighted: bool,
}

impl Edge {
    pub fn new(route: Route, style: ConnectorStyle, color: Color, highlighted: bool) -> Self {
        Self {
            route,
            style,
            color,
            highlighted,
        }
    }

    /// Renders the edge onto the edge layer.
    pub fn render(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let arrow = self.style.has_arrow();

        match self.style.family() {
            CurveFamily::Curved => {
                let data = self.route.to_path_data();

                if arrow {
                    let base = apply_stroke!(curve(&data), &base_stroke());
                    output.add_to_layer(RenderLayer::Edge, Box::new(with_arrow!(base, arrow)));
                }

                let stroke = StrokeDefinition::solid(self.color, CURVED_WIDTH);
                let path = apply_stroke!(curve(&data), &stroke).set("mask", defs::url(MASK_ID));
                let path = with_pulse!(with_arrow!(path, arrow), self.style);
                output.add_to_layer(
                    RenderLayer::Edge,
                    Box::new(with_highlight!(path, self, CURVED_WIDTH)),
                );
            }
            CurveFamily::Straight => {
                if arrow {
                    let base = apply_stroke!(self.line(), &base_stroke());
                    output.add_to_layer(RenderLayer::Edge, Box::new(with_arrow!(base, arrow)));
                }

                let stroke = StrokeDefinition::solid(self.color, LINE_WIDTH);
                let line = apply_stroke!(self.line(), &stroke).set("mask", defs::url(MASK_ID));
                let line = with_pulse!(with_arrow!(line, arrow), self.style);
                output.add_to_layer(
                    RenderLayer::Edge,
                    Box::new(with_highlight!(line, self, LINE_WIDTH)),
                );
            }
            CurveFamily::Dashed => {
                let stroke = StrokeDefinition::dashed(self.color, LINE_WIDTH);
                let mut line = with_arrow!(apply_stroke!(self.line(), &stroke), arrow);
                if let Some(period) = self.style.period_secs() {
                    line = line.add(dash_flow(period));
                }
                output.add_to_layer(
                    RenderLayer::Edge,
                    Box::new(with_highlight!(line, self, LINE_WIDTH)),
                );
            }
            CurveFamily::Solid => {
                let stroke = StrokeDefinition::solid(self.color, LINE_WIDTH);
                let line = with_arrow!(apply_stroke!(self.line(), &stroke), arrow);
                output.add_to_layer(
                    RenderLayer::Edge,
                    Box::new(with_highlight!(line, self, LINE_WIDTH)),
                );
            }
            CurveFamily::FlowingDash => {
                let stroke = StrokeDefinition::dashed(self.color, LINE_WIDTH);
                let line = apply_stroke!(self.line(), &stroke)
                    .set("class", ANIMATED_LINE_CLASS)
                    .set("marker-end", defs::url(ARROW_ID));
                output.add_to_layer(
                    RenderLayer::Edge,
                    Box::new(with_highlight!(line, self, LINE_WIDTH)),
                );
            }
        }

        output
    }

    fn line(&self) -> Line {
        let (start, end) = (self.route.start(), self.route.end());
        Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y())
    }
}

fn curve(data: &str) -> Path {
    Path::new().set("d", data).set("fill", "none")
}

fn base_stroke() -> StrokeDefinition {
    let color = Color::new(BASE_COLOR).unwrap_or_default().with_alpha(BASE_OPACITY);
    StrokeDefinition::solid(color, LINE_WIDTH)
}

fn opacity_pulse(period: u32) -> Animate {
    Animate::new()
        .set("attributeName", "stroke-opacity")
        .set("values", "0.3;1;0.3")
        .set("dur", format!("{period}s"))
        .set("repeatCount", "indefinite")
}

fn dash_flow(period: u32) -> Animate {
    Animate::new()
        .set("attributeName", "stroke-dashoffset")
        .set("from", 0)
        .set("to", DASH_TRAVEL)
        .set("dur", format!("{period}s"))
        .set("repeatCount", "indefinite")
}

fn width_pulse(width: f32) -> Animate {
    let peak = width + HIGHLIGHT_GROWTH;
    Animate::new()
        .set("attributeName", "stroke-width")
        .set("values", format!("{width};{peak};{width}"))
        .set("dur", "1s")
        .set("repeatCount", "indefinite")
}
