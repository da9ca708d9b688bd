//! Embedding helpers: an HTML shell around a rendered SVG, and the SVG as
//! a base64 data URI for downloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

/// File name suggested by the download link.
pub const DOWNLOAD_NAME: &str = "diagram.svg";

/// Wraps `svg` in a minimal HTML page, inside a scrolling `<div>` of the
/// canvas size.
pub fn wrap_html(svg: &str, width: f32, height: f32) -> String {
    format!(
        "<html><body><div style=\"width:{width}px; height:{height}px; \
         border:1px solid #ccc; overflow:auto\">{svg}</div></body></html>"
    )
}

/// `data:` URI carrying `svg` base64-encoded.
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", BASE64_STANDARD.encode(svg))
}

/// HTML anchor that downloads `svg` as [`DOWNLOAD_NAME`].
pub fn download_link(svg: &str) -> String {
    format!(
        "<a href=\"{}\" download=\"{DOWNLOAD_NAME}\">Download SVG</a>",
        svg_data_uri(svg)
    )
}
