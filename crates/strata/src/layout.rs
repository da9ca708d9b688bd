//! Tier layout and connection routing.
//!
//! [`tier`] turns the node list into fixed positions on the canvas and
//! [`route`] computes the endpoints and Bézier control point of each
//! connection between two placed nodes.

pub mod route;
pub mod tier;

pub use route::{Orientation, Route};
pub use tier::{Layout, PositionedNode};
