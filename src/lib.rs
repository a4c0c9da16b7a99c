pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;
pub mod primitives;

pub use error::{PolysliceError, Result};
pub use geometry::{Outcome, Side, SplitResult};
pub use operations::{split_geometry, split_polygon, LineSplit, PolygonSlice, SliceOptions};
