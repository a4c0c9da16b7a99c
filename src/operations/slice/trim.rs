use geo::{LineString, Polygon};
use tracing::trace;

use crate::error::SliceError;
use crate::math::Coord;
use crate::primitives::point_in_polygon;

/// Strips the leading and trailing runs of line points that lie inside
/// (or on) the polygon.
///
/// Endpoints that never leave the polygon cannot contribute a clean boundary
/// crossing, so only the span between the first and last outside points is
/// usable as a cutter.
///
/// # Errors
///
/// Returns `SliceError::NoUsableCutter` if fewer than 2 points remain.
pub fn trim(polygon: &Polygon<f64>, line: &LineString<f64>) -> Result<LineString<f64>, SliceError> {
    let coords = &line.0;
    let inside = |c: &&Coord| point_in_polygon(**c, polygon);

    let start = coords.iter().take_while(inside).count();
    let end = coords.len() - coords[start..].iter().rev().take_while(inside).count();
    let kept = &coords[start..end];

    trace!(
        leading = start,
        trailing = coords.len() - end,
        remaining = kept.len(),
        "trimmed splitter line"
    );

    if kept.len() < 2 {
        return Err(SliceError::NoUsableCutter {
            remaining: kept.len(),
        });
    }
    Ok(LineString::new(kept.to_vec()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square() -> Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0), (x: 10.0, y: 0.0)]
    }

    #[test]
    fn line_with_outside_endpoints_is_kept() {
        let line = LineString::from(vec![(5.0, 15.0), (5.0, -15.0)]);
        assert_eq!(trim(&square(), &line).unwrap(), line);
    }

    #[test]
    fn inside_prefix_and_suffix_are_removed() {
        let line = LineString::from(vec![
            (2.0, 2.0),
            (3.0, 3.0),
            (5.0, 15.0),
            (5.0, -15.0),
            (8.0, 8.0),
        ]);
        let trimmed = trim(&square(), &line).unwrap();
        assert_eq!(trimmed, LineString::from(vec![(5.0, 15.0), (5.0, -15.0)]));
    }

    #[test]
    fn boundary_points_count_as_inside() {
        let line = LineString::from(vec![(0.0, 5.0), (-5.0, 5.0), (15.0, 5.0), (10.0, 5.0)]);
        let trimmed = trim(&square(), &line).unwrap();
        assert_eq!(trimmed, LineString::from(vec![(-5.0, 5.0), (15.0, 5.0)]));
    }

    #[test]
    fn interior_points_between_outside_points_are_kept() {
        let line = LineString::from(vec![(5.0, 15.0), (5.0, 5.0), (5.0, -15.0)]);
        assert_eq!(trim(&square(), &line).unwrap().0.len(), 3);
    }

    #[test]
    fn fully_inside_line_is_unusable() {
        let line = LineString::from(vec![(2.0, 2.0), (8.0, 8.0)]);
        assert!(matches!(
            trim(&square(), &line),
            Err(SliceError::NoUsableCutter { remaining: 0 })
        ));
    }

    #[test]
    fn single_outside_point_is_unusable() {
        let line = LineString::from(vec![(2.0, 2.0), (15.0, 15.0), (8.0, 8.0)]);
        assert!(matches!(
            trim(&square(), &line),
            Err(SliceError::NoUsableCutter { remaining: 1 })
        ));
    }
}
