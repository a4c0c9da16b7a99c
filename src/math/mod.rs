pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D coordinate type shared with the `geo` geometry model.
pub type Coord = geo::Coord<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the vector from `a` to `b`.
#[must_use]
pub fn vector_between(a: Coord, b: Coord) -> Vector2 {
    Vector2::new(b.x - a.x, b.y - a.y)
}

/// Returns `true` if both coordinates are within `tol` of each other.
#[must_use]
pub fn coords_close(a: Coord, b: Coord, tol: f64) -> bool {
    (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
}

/// Returns `true` if both components are finite.
#[must_use]
pub fn is_finite(c: Coord) -> bool {
    c.x.is_finite() && c.y.is_finite()
}
