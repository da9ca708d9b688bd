//! Tier assignment and horizontal placement.
//!
//! Every node sits in the band of its tier. Within a band, nodes are laid
//! out left to right in first-seen order and the row is centred on the
//! canvas.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};

use strata_core::{
    geometry::{Bounds, Point, Size},
    semantic::{Diagram, Node, Tier},
};

use crate::config::LayoutConfig;

/// Highest tier with a band on the canvas.
pub const MAX_TIER: u32 = 5;

/// A node together with its tier and the box it occupies.
#[derive(Debug, Clone)]
pub struct PositionedNode<'a> {
    node: &'a Node,
    tier: Tier,
    bounds: Bounds,
}

impl<'a> PositionedNode<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn label(&self) -> &'a str {
        self.node.label()
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Top-left corner of the node box.
    pub fn position(&self) -> Point {
        self.bounds.min_point()
    }
}

/// Placed nodes keyed by label, in draw order (tier 1 first, then
/// declaration order within a tier).
#[derive(Debug, Clone, Default)]
pub struct Layout<'a> {
    nodes: IndexMap<&'a str, PositionedNode<'a>>,
}

impl<'a> Layout<'a> {
    /// Places every node of `diagram` that has a band on the canvas.
    ///
    /// Nodes whose type tag yields no tier in `1..=MAX_TIER` are left out,
    /// as are later declarations of a label that is already placed.
    pub fn new(diagram: &'a Diagram, config: &LayoutConfig) -> Self {
        let mut tiers: IndexMap<Tier, Vec<&'a Node>> = IndexMap::new();
        let mut seen = HashSet::new();

        for node in diagram.nodes() {
            if !seen.insert(node.label()) {
                debug!(label = node.label(); "Skipping duplicate node declaration");
                continue;
            }

            match node.tier().filter(|tier| tier_y(*tier, config).is_some()) {
                Some(tier) => tiers.entry(tier).or_default().push(node),
                None => {
                    debug!(
                        label = node.label(), type_tag = node.type_tag();
                        "Node has no tier band, not placed"
                    );
                }
            }
        }
        tiers.sort_keys();

        let size = Size::new(config.node_width(), config.node_height());
        let mut nodes = IndexMap::new();

        for (tier, members) in &tiers {
            let Some(y) = tier_y(*tier, config) else {
                continue;
            };

            for (node, x) in members.iter().zip(row_positions(members.len(), config)) {
                let bounds = Bounds::new_from_top_left(Point::new(x, y), size);
                trace!(label = node.label(), tier:% = tier, x = x, y = y; "Placed node");
                nodes.insert(
                    node.label(),
                    PositionedNode {
                        node,
                        tier: *tier,
                        bounds,
                    },
                );
            }
        }

        debug!(placed = nodes.len(), tiers = tiers.len(); "Tier layout complete");

        Self { nodes }
    }

    /// Looks up a placed node by label.
    pub fn get(&self, label: &str) -> Option<&PositionedNode<'a>> {
        self.nodes.get(label)
    }

    /// Iterates over placed nodes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &PositionedNode<'a>> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Top edge of a tier's band, or `None` for a tier without a band.
///
/// Tiers 1 to 4 are spaced two gaps apart from the top; tier 5 is pinned
/// one and a half gaps above the bottom edge.
pub fn tier_y(tier: Tier, config: &LayoutConfig) -> Option<f32> {
    let gap = config.gap();
    match tier.number() {
        n @ 1..=4 => Some(gap * (2 * n - 1) as f32),
        MAX_TIER => Some(config.canvas_height() - config.node_height() - 1.5 * gap),
        _ => None,
    }
}

/// Left edges of `count` nodes laid out in a centred row.
pub fn row_positions(count: usize, config: &LayoutConfig) -> impl Iterator<Item = f32> {
    let width = config.node_width();
    let gap = config.gap();
    let required = count as f32 * width + count.saturating_sub(1) as f32 * gap;
    let start = (config.canvas_width() - required) / 2.0;

    (0..count).map(move |index| start + index as f32 * (width + gap))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn diagram(nodes: &[(&str, &str)]) -> Diagram {
        let mut diagram = Diagram::default();
        for (type_tag, label) in nodes {
            diagram.push_node(Node::new(*type_tag, *label));
        }
        diagram
    }

    #[test]
    fn test_tier_bands() {
        let config = LayoutConfig::default();
        let ys: Vec<_> = (1..=6).map(|n| tier_y(Tier::new(n), &config)).collect();

        assert_eq!(ys, vec![Some(50.0), Some(150.0), Some(250.0), Some(350.0), Some(475.0), None]);
        assert_eq!(tier_y(Tier::new(0), &config), None);
    }

    #[test]
    fn test_single_node_centred() {
        let config = LayoutConfig::default();
        let xs: Vec<_> = row_positions(1, &config).collect();
        assert_eq!(xs.len(), 1);
        assert_approx_eq!(f32, xs[0], 340.0);
    }

    #[test]
    fn test_row_spacing() {
        let config = LayoutConfig::default();
        let xs: Vec<_> = row_positions(3, &config).collect();

        // 3 * 120 + 2 * 50 = 460, start = (800 - 460) / 2
        assert_approx_eq!(f32, xs[0], 170.0);
        assert_approx_eq!(f32, xs[1], 340.0);
        assert_approx_eq!(f32, xs[2], 510.0);
    }

    #[test]
    fn test_layout_groups_by_tier() {
        let diagram = diagram(&[
            ("LAYER2", "B1"),
            ("LAYER1", "A"),
            ("LAYER2", "B2"),
            ("LAYER5", "E"),
        ]);
        let layout = Layout::new(&diagram, &LayoutConfig::default());

        let order: Vec<_> = layout.iter().map(|node| node.label()).collect();
        assert_eq!(order, vec!["A", "B1", "B2", "E"]);

        let b1 = layout.get("B1").unwrap();
        let b2 = layout.get("B2").unwrap();
        assert_approx_eq!(f32, b1.position().y(), 150.0);
        assert_approx_eq!(f32, b2.position().y(), 150.0);
        assert!(b1.position().x() < b2.position().x());
        assert_approx_eq!(f32, layout.get("E").unwrap().position().y(), 475.0);
    }

    #[test]
    fn test_multi_digit_tier_is_not_placed() {
        let diagram = diagram(&[("LAYER12", "Far"), ("LAYER1", "Near")]);
        let layout = Layout::new(&diagram, &LayoutConfig::default());

        assert_eq!(layout.len(), 1);
        assert!(layout.get("Far").is_none());
    }

    #[test]
    fn test_untiered_nodes_are_not_placed() {
        let diagram = diagram(&[("SERVICE", "Svc"), ("LAYER", "Bare"), ("layer1", "Lower")]);
        let layout = Layout::new(&diagram, &LayoutConfig::default());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_duplicate_label_first_wins() {
        let diagram = diagram(&[("LAYER1", "A"), ("LAYER3", "A"), ("LAYER3", "C")]);
        let layout = Layout::new(&diagram, &LayoutConfig::default());

        let a = layout.get("A").unwrap();
        assert_eq!(a.tier(), Tier::new(1));

        // The duplicate does not take a slot in tier 3
        let c = layout.get("C").unwrap();
        assert_approx_eq!(f32, c.position().x(), 340.0);
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn check_row_is_centred(count: usize, width: f32, gap: f32) -> Result<(), TestCaseError> {
            let config = LayoutConfig::default()
                .with_node_size(width, 50.0)
                .with_gap(gap);
            let xs: Vec<_> = row_positions(count, &config).collect();

            prop_assert_eq!(xs.len(), count);

            let required = count as f32 * width + (count - 1) as f32 * gap;
            let expected_left = (config.canvas_width() - required) / 2.0;
            let left_margin = xs[0];
            let right_margin = config.canvas_width() - (xs[count - 1] + width);

            prop_assert!((left_margin - expected_left).abs() < 1e-2);
            prop_assert!((left_margin - right_margin).abs() < 1e-2);
            Ok(())
        }

        proptest! {
            #[test]
            fn row_is_centred(count in 1usize..12, width in 10.0f32..200.0, gap in 0.0f32..80.0) {
                check_row_is_centred(count, width, gap)?;
            }
        }
    }
}
