pub mod line_split;
pub mod route;
pub mod slice;

pub use line_split::LineSplit;
pub use route::{split_geometry, SplitPieces};
pub use slice::{split_polygon, HoleHandling, PolygonSlice, SliceOptions};
