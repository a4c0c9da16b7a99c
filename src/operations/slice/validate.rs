use geo::{LineString, Polygon};

use crate::error::InputError;
use crate::math::is_finite;
use crate::primitives::decompose_self_intersections;

/// Checks that `polygon` has a usable, finite, simple exterior.
///
/// # Errors
///
/// Returns the `InputError` describing the first violated precondition.
pub fn check_polygon(polygon: &Polygon<f64>) -> Result<(), InputError> {
    let found = polygon.exterior().0.len();
    if found < 4 {
        return Err(InputError::TooFewPoints {
            what: "polygon exterior",
            found,
            min: 4,
        });
    }
    let finite = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .all(|ring| ring.0.iter().all(|c| is_finite(*c)));
    if !finite {
        return Err(InputError::NonFiniteCoordinate { what: "polygon" });
    }
    let pieces = decompose_self_intersections(polygon).len();
    if pieces != 1 {
        return Err(InputError::SelfIntersecting { pieces });
    }
    Ok(())
}

/// Checks that `line` has at least 2 finite points.
///
/// # Errors
///
/// Returns the `InputError` describing the first violated precondition.
pub fn check_line(line: &LineString<f64>) -> Result<(), InputError> {
    let found = line.0.len();
    if found < 2 {
        return Err(InputError::TooFewPoints {
            what: "splitter line",
            found,
            min: 2,
        });
    }
    if !line.0.iter().all(|c| is_finite(*c)) {
        return Err(InputError::NonFiniteCoordinate {
            what: "splitter line",
        });
    }
    Ok(())
}
