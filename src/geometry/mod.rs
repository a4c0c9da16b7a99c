//! Value types exchanged with the slicing core.
//!
//! Points, rings, polygons and lines are the `geo` crate's types; this module
//! adds the side tag and the per-side and overall results.

pub mod cut;
pub mod side;
pub mod split_result;

pub use cut::{Cut, CutGeometry};
pub use geo::{Coord, LineString, MultiPolygon, Polygon};
pub use side::Side;
pub use split_result::{Outcome, SplitResult};
