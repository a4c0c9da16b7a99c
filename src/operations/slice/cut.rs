use geo::{LineString, MultiPolygon, Polygon};

use super::options::{HoleHandling, SliceOptions};
use super::strip::build_strip;
use crate::error::SliceError;
use crate::geometry::{Cut, Side};
use crate::primitives::{boolean_difference, boundary_overlap, line_intersections};

/// Cuts `polygon` on one side of `line` by subtracting that side's strip.
///
/// The line must cross the polygon boundary a positive, even number of
/// times. Fragments of the difference whose boundary does not run along the
/// line are dropped as artifacts of the boolean operation.
///
/// # Errors
///
/// - `SliceError::OddOrZeroCrossing` if the crossing count is zero or odd.
/// - `SliceError::DegenerateDifference` if the strip or the difference fails.
/// - `SliceError::NoQualifyingFragment` if no fragment touches the line.
pub fn cut(
    polygon: &Polygon<f64>,
    line: &LineString<f64>,
    side: Side,
    options: &SliceOptions,
) -> Result<Cut, SliceError> {
    let count = line_intersections(polygon, line).len();
    if count == 0 || count % 2 != 0 {
        return Err(SliceError::OddOrZeroCrossing { count });
    }

    let strip = build_strip(line, side, &options.offset_ladder)
        .map_err(SliceError::DegenerateDifference)?;
    let clipped =
        boolean_difference(polygon, &strip.polygon).map_err(SliceError::DegenerateDifference)?;

    let multipart = clipped.0.len() > 1;
    let mut fragments = select_fragments(clipped, line, options.overlap_tolerance);
    if multipart && options.hole_handling == HoleHandling::DropFromMultipart {
        fragments = fragments
            .into_iter()
            .map(|fragment| Polygon::new(fragment.into_inner().0, Vec::new()))
            .collect();
    }

    Cut::from_fragments(side, fragments).ok_or(SliceError::NoQualifyingFragment)
}

/// Keeps the parts of a difference result whose boundary runs along `line`.
#[must_use]
pub fn select_fragments(
    clipped: MultiPolygon<f64>,
    line: &LineString<f64>,
    tolerance: f64,
) -> Vec<Polygon<f64>> {
    clipped
        .0
        .into_iter()
        .filter(|part| boundary_overlap(part, line, tolerance))
        .collect()
}
