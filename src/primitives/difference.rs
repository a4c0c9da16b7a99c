use geo::{Area, BooleanOps, MultiPolygon, Polygon};

use crate::error::GeometryError;
use crate::math::{is_finite, Coord, TOLERANCE};

/// Planar set difference `subject - clip`.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` if either operand or the result holds a
/// non-finite coordinate, and `GeometryError::Degenerate` if `clip` has no area.
pub fn boolean_difference(
    subject: &Polygon<f64>,
    clip: &Polygon<f64>,
) -> Result<MultiPolygon<f64>, GeometryError> {
    check_finite(subject)?;
    check_finite(clip)?;
    if clip.unsigned_area() < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "subtrahend polygon has no area".to_owned(),
        ));
    }

    let result = subject.difference(clip);
    for part in &result.0 {
        check_finite(part)?;
    }
    Ok(result)
}

fn check_finite(polygon: &Polygon<f64>) -> Result<(), GeometryError> {
    let bad = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.0.iter())
        .find(|c| !is_finite(**c));
    match bad {
        Some(&Coord { x, y }) => Err(GeometryError::NonFinite { x, y }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::polygon;

    fn square() -> Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)]
    }

    #[test]
    fn band_through_square_leaves_two_parts() {
        let band = polygon![
            (x: 4.0, y: -1.0),
            (x: 6.0, y: -1.0),
            (x: 6.0, y: 11.0),
            (x: 4.0, y: 11.0),
        ];
        let diff = boolean_difference(&square(), &band).unwrap();
        assert_eq!(diff.0.len(), 2);
        assert_relative_eq!(diff.unsigned_area(), 80.0, epsilon = 1e-6);
    }

    #[test]
    fn disjoint_clip_keeps_subject() {
        let far = polygon![
            (x: 20.0, y: 0.0),
            (x: 21.0, y: 0.0),
            (x: 21.0, y: 1.0),
            (x: 20.0, y: 1.0),
        ];
        let diff = boolean_difference(&square(), &far).unwrap();
        assert_eq!(diff.0.len(), 1);
        assert_relative_eq!(diff.unsigned_area(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_area_clip_is_degenerate() {
        let flat = polygon![(x: 0.0, y: 5.0), (x: 10.0, y: 5.0), (x: 5.0, y: 5.0)];
        assert!(matches!(
            boolean_difference(&square(), &flat),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn non_finite_input_fails() {
        let bad = polygon![(x: 0.0, y: 0.0), (x: f64::NAN, y: 0.0), (x: 1.0, y: 1.0)];
        assert!(matches!(
            boolean_difference(&square(), &bad),
            Err(GeometryError::NonFinite { .. })
        ));
    }
}
