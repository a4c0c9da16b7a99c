//! Planar geometry primitives the slicing core is built on.
//!
//! The core only asks these questions and never re-derives them:
//! containment, boundary crossings, parallel offsets, boolean difference,
//! self-intersection decomposition and boundary overlap.

mod containment;
mod crossings;
mod difference;
mod offset;
mod overlap;
pub mod self_intersect;

pub use containment::point_in_polygon;
pub use crossings::line_intersections;
pub use difference::boolean_difference;
pub use offset::offset_line;
pub use overlap::boundary_overlap;
pub use self_intersect::{decompose_self_intersections, is_simple};
