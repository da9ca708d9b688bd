//! Shared `<defs>` block: sweep gradient and mask, arrow marker, and the
//! keyframes driving flowing-dash edges.

use svg::node::element::{
    Animate, Definitions, LinearGradient, Marker, Mask, Path, Rectangle, Stop, Style,
};

/// Id of the travelling highlight mask.
pub const MASK_ID: &str = "gradient-mask";
/// Id of the arrowhead marker.
pub const ARROW_ID: &str = "arrow";
/// CSS class of flowing-dash edges.
pub const ANIMATED_LINE_CLASS: &str = "animated-line";

const GRADIENT_ID: &str = "gradient";

const KEYFRAMES: &str = "@keyframes dash { to { stroke-dashoffset: -20; } } \
.animated-line { stroke-dasharray: 5, 5; animation: dash 1s linear infinite; }";

/// `url(#id)` reference to a definition.
pub fn url(id: &str) -> String {
    format!("url(#{id})")
}

/// Builds the `<defs>` block with a sweep of `sweep_secs` seconds.
pub fn create_definitions(sweep_secs: u32) -> Definitions {
    Definitions::new()
        .add(sweep_gradient())
        .add(sweep_mask(sweep_secs))
        .add(arrow_marker())
        .add(Style::new(KEYFRAMES))
}

// White band, opaque in the middle and fading out at both ends
fn sweep_gradient() -> LinearGradient {
    [(0.0, 0.0), (0.4, 1.0), (0.6, 1.0), (1.0, 0.0)]
        .into_iter()
        .fold(LinearGradient::new().set("id", GRADIENT_ID), |gradient, (offset, opacity)| {
            gradient.add(
                Stop::new()
                    .set("offset", offset)
                    .set("stop-color", "white")
                    .set("stop-opacity", opacity),
            )
        })
}

fn sweep_mask(sweep_secs: u32) -> Mask {
    let slide = Animate::new()
        .set("attributeName", "x")
        .set("from", "100%")
        .set("to", "-100%")
        .set("dur", format!("{sweep_secs}s"))
        .set("repeatCount", "indefinite");

    let band = Rectangle::new()
        .set("class", "mask-rect")
        .set("width", "200%")
        .set("height", "100%")
        .set("fill", url(GRADIENT_ID))
        .add(slide);

    Mask::new().set("id", MASK_ID).add(band)
}

fn arrow_marker() -> Marker {
    Marker::new()
        .set("id", ARROW_ID)
        .set("markerWidth", 10)
        .set("markerHeight", 10)
        .set("refX", 10)
        .set("refY", 3)
        .set("orient", "auto")
        .add(
            Path::new()
                .set("d", "M0,0 L0,6 L9,3 z")
                .set("fill", "context-stroke"),
        )
}
