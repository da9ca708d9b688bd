//! Integration tests for the DiagramBuilder API
//!
//! These tests drive the public API from source text to SVG and HTML.

use float_cmp::assert_approx_eq;

use strata::{
    DiagramBuilder,
    config::{AppConfig, LayoutConfig, StyleConfig},
    connector::{Connector, CurveFamily},
    layout::Layout,
};

const TWO_TIERS: &str = "[diagram nodes]\nLAYER1 - A\nLAYER2 - B\n[diagram connection]\nA ~> B\n";

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_two_tier_end_to_end() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(TWO_TIERS);

    assert_eq!(diagram.nodes().len(), 2);
    assert_eq!(diagram.connections().len(), 1);
    assert_eq!(diagram.connections()[0].connector(), Connector::WaveArrow);
    assert_eq!(diagram.connections()[0].style().family(), CurveFamily::Curved);
    assert!(diagram.animations().is_empty());

    let layout = Layout::new(&diagram, builder.config().layout());
    let a = layout.get("A").expect("A is placed");
    let b = layout.get("B").expect("B is placed");
    assert_approx_eq!(f32, a.position().x(), b.position().x());
    assert!(a.position().y() < b.position().y());

    let svg = builder.render_svg(&diagram);
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"dur="6s""#), "Curved arrow pulses every 6 seconds");
    assert!(svg.contains(r#"marker-end="url(#arrow)""#));
    assert!(!svg.contains("data-highlighted"));
    assert!(svg.contains(">A</text>") || svg.contains(">\nA\n</text>"));
}

#[test]
fn test_animation_matching_is_symmetric() {
    let builder = DiagramBuilder::default();
    let forward = builder.source_to_svg(&format!("{TWO_TIERS}[animation]\nA ~> B\n"));
    let reverse = builder.source_to_svg(&format!("{TWO_TIERS}[animation]\nB ~> A\n"));

    assert_eq!(forward.matches(r#"data-highlighted="true""#).count(), 1);
    assert_eq!(forward, reverse);
}

#[test]
fn test_dangling_connection_is_skipped() {
    let builder = DiagramBuilder::default();
    let with_ghost = builder.source_to_svg(&format!("{TWO_TIERS}A ~> Ghost\nGhost >> B\n"));
    let without = builder.source_to_svg(TWO_TIERS);

    assert_eq!(with_ghost, without);
}

#[test]
fn test_rendering_is_idempotent() {
    let source = "\
[diagram nodes]
LAYER1 - User
LAYER2 - Edge
LAYER3 - Web
LAYER3 - Web2
LAYER5 - Db
[diagram connection]
User to> Edge
Edge ~> Web
Edge ~> Web2
Web == Web2
Web -> Db
Web2 >> Db
[animation]
Db -> Web
";
    let builder = DiagramBuilder::default();

    assert_eq!(builder.source_to_svg(source), builder.source_to_svg(source));
}

#[test]
fn test_empty_input_renders_valid_document() {
    let builder = DiagramBuilder::default();
    let svg = builder.source_to_svg("");

    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert!(svg.contains("<defs>"));
}

#[test]
fn test_garbled_input_never_fails() {
    let builder = DiagramBuilder::default();
    let parsed = builder.parse_with_diagnostics(
        "]]]\n[diagram nodes]\nnothing here\n[diagram connection]\nA B C\n",
    );

    assert!(parsed.diagram().is_empty());
    assert_eq!(parsed.diagnostics().len(), 3);
    assert!(builder.render_svg(parsed.diagram()).contains("</svg>"));
}

#[test]
fn test_render_html_wrapper() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(TWO_TIERS);
    let html = builder.render_html(&diagram);

    assert!(html.starts_with("<html><body><div style=\"width:800px; height:600px;"));
    assert!(html.ends_with("</div></body></html>"));
    assert!(html.contains(&builder.render_svg(&diagram)));
}

#[test]
fn test_render_data_uri_and_link() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(TWO_TIERS);

    let uri = builder.render_data_uri(&diagram);
    assert!(uri.starts_with("data:image/svg+xml;base64,"));

    let link = builder.render_download_link(&diagram);
    assert!(link.contains(&uri));
    assert!(link.contains("download=\"diagram.svg\""));
}

#[test]
fn test_builder_with_config() {
    let style = StyleConfig::new(vec!["#000000".to_string()], 3, 18);
    let config = AppConfig::new(LayoutConfig::default(), style);
    config.validate().expect("config is valid");

    let builder = DiagramBuilder::new(config);
    let svg = builder.source_to_svg(TWO_TIERS);

    assert!(svg.contains(r#"dur="3s""#), "Sweep period comes from the config");
    assert!(svg.contains(r#"font-size="18""#));
}
