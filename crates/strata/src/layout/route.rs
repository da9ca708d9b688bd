//! Connection routing between placed nodes.

use strata_core::{connector::CurveFamily, geometry::Point};

use super::tier::PositionedNode;
use crate::config::LayoutConfig;

/// How a connection attaches to its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Source tier is above the target tier: bottom-centre to top-centre.
    Vertical,
    /// Same tier or upward: right-middle to left-middle.
    Horizontal,
}

/// Endpoints and quadratic Bézier control point of one connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    start: Point,
    control: Point,
    end: Point,
    orientation: Orientation,
}

impl Route {
    /// Routes a connection from `source` to `target`.
    ///
    /// The curved family lifts vertical connections by a clamped fraction
    /// of their height and bulges every other connection up and to the
    /// right. The remaining families bend by a fixed offset, downward when
    /// the connection runs downward.
    pub fn new(
        source: &PositionedNode<'_>,
        target: &PositionedNode<'_>,
        family: CurveFamily,
        config: &LayoutConfig,
    ) -> Self {
        let orientation = if source.tier() < target.tier() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };

        let (start, end) = match orientation {
            Orientation::Vertical => (
                source.bounds().bottom_center(),
                target.bounds().top_center(),
            ),
            Orientation::Horizontal => (
                source.bounds().right_middle(),
                target.bounds().left_middle(),
            ),
        };

        let mid = start.midpoint(end);
        let control = match (family, orientation) {
            (CurveFamily::Curved, Orientation::Vertical) => {
                let lift = (config.curve_factor() * (end.y() - start.y()))
                    .max(config.curve_min())
                    .min(config.curve_max());
                Point::new(mid.x(), mid.y() - lift)
            }
            (CurveFamily::Curved, Orientation::Horizontal) => {
                Point::new(mid.x() + config.bulge_x(), mid.y() - config.bulge_y())
            }
            _ if start.y() < end.y() => Point::new(mid.x(), mid.y() + config.bend()),
            _ => Point::new(mid.x(), mid.y() - config.bend()),
        };

        Self {
            start,
            control,
            end,
            orientation,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn control(&self) -> Point {
        self.control
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// SVG path data of the quadratic curve.
    pub fn to_path_data(&self) -> String {
        format!(
            "M {},{} Q {},{} {},{}",
            self.start.x(),
            self.start.y(),
            self.control.x(),
            self.control.y(),
            self.end.x(),
            self.end.y()
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use strata_core::semantic::{Diagram, Node};

    use super::*;
    use crate::layout::Layout;

    fn diagram(nodes: &[(&str, &str)]) -> Diagram {
        let mut diagram = Diagram::default();
        for (type_tag, label) in nodes {
            diagram.push_node(Node::new(*type_tag, *label));
        }
        diagram
    }

    fn route(diagram: &Diagram, source: &str, target: &str, family: CurveFamily) -> Route {
        let config = LayoutConfig::default();
        let layout = Layout::new(diagram, &config);
        Route::new(
            layout.get(source).unwrap(),
            layout.get(target).unwrap(),
            family,
            &config,
        )
    }

    #[test]
    fn test_vertical_endpoints() {
        let diagram = diagram(&[("LAYER1", "A"), ("LAYER2", "B")]);
        let route = route(&diagram, "A", "B", CurveFamily::Curved);

        assert_eq!(route.orientation(), Orientation::Vertical);
        assert_approx_eq!(f32, route.start().x(), 400.0);
        assert_approx_eq!(f32, route.start().y(), 100.0);
        assert_approx_eq!(f32, route.end().x(), 400.0);
        assert_approx_eq!(f32, route.end().y(), 150.0);
    }

    #[test]
    fn test_curved_vertical_lift_clamped_low() {
        // dy = 50, half of it is below the minimum lift
        let diagram = diagram(&[("LAYER1", "A"), ("LAYER2", "B")]);
        let route = route(&diagram, "A", "B", CurveFamily::Curved);

        assert_approx_eq!(f32, route.control().x(), 400.0);
        assert_approx_eq!(f32, route.control().y(), 125.0 - 30.0);
    }

    #[test]
    fn test_curved_vertical_lift_clamped_high() {
        // dy = 375, half of it is above the maximum lift
        let diagram = diagram(&[("LAYER1", "A"), ("LAYER5", "E")]);
        let route = route(&diagram, "A", "E", CurveFamily::Curved);

        let mid_y = (100.0 + 475.0) / 2.0;
        assert_approx_eq!(f32, route.control().y(), mid_y - 60.0);
    }

    #[test]
    fn test_curved_vertical_lift_spans() {
        let diagram = diagram(&[("LAYER2", "B"), ("LAYER4", "D")]);
        let route = route(&diagram, "B", "D", CurveFamily::Curved);

        // start y = 200, end y = 350, dy = 150, lift = min(75, 60)
        assert_approx_eq!(f32, route.control().y(), 275.0 - 60.0);

        let diagram = self::diagram(&[("LAYER4", "D"), ("LAYER5", "E")]);
        let route = self::route(&diagram, "D", "E", CurveFamily::Curved);

        // start y = 400, end y = 475, dy = 75, lift = 37.5
        assert_approx_eq!(f32, route.control().y(), 437.5 - 37.5);
    }

    #[test]
    fn test_same_tier_is_horizontal() {
        let diagram = diagram(&[("LAYER3", "L"), ("LAYER3", "R")]);
        let route = route(&diagram, "L", "R", CurveFamily::Curved);

        assert_eq!(route.orientation(), Orientation::Horizontal);
        // Row of two: start x = (800 - 290) / 2 = 255
        assert_approx_eq!(f32, route.start().x(), 375.0);
        assert_approx_eq!(f32, route.start().y(), 275.0);
        assert_approx_eq!(f32, route.end().x(), 425.0);
        assert_approx_eq!(f32, route.control().x(), 400.0 + 100.0);
        assert_approx_eq!(f32, route.control().y(), 275.0 - 60.0);
    }

    #[test]
    fn test_upward_is_horizontal() {
        let diagram = diagram(&[("LAYER1", "A"), ("LAYER2", "B")]);
        let route = route(&diagram, "B", "A", CurveFamily::Curved);

        assert_eq!(route.orientation(), Orientation::Horizontal);
        assert_approx_eq!(f32, route.start().x(), 460.0);
        assert_approx_eq!(f32, route.start().y(), 175.0);
        assert_approx_eq!(f32, route.end().x(), 340.0);
        assert_approx_eq!(f32, route.end().y(), 75.0);
    }

    #[test]
    fn test_other_families_bend_by_direction() {
        let diagram = diagram(&[("LAYER1", "A"), ("LAYER2", "B")]);

        let down = route(&diagram, "A", "B", CurveFamily::Dashed);
        assert_approx_eq!(f32, down.control().y(), 125.0 + 50.0);

        let up = route(&diagram, "B", "A", CurveFamily::Straight);
        assert_approx_eq!(f32, up.control().y(), 125.0 - 50.0);
        assert_approx_eq!(f32, up.control().x(), 400.0);
    }

    #[test]
    fn test_path_data() {
        let diagram = diagram(&[("LAYER1", "A"), ("LAYER2", "B")]);
        let route = route(&diagram, "A", "B", CurveFamily::Curved);

        assert_eq!(route.to_path_data(), "M 400,100 Q 400,95 400,150");
    }
}
