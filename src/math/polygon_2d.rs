use super::{vector_between, Coord, Vector2, TOLERANCE};
use crate::error::GeometryError;

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated
/// closing point contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Coord]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Rotates an open ring (no repeated closing point) so it starts at the
/// leftmost vertex (smallest x), breaking ties by smallest y.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Coord]) -> Vec<Coord> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Returns `true` if two closed rings trace the same vertices in the same
/// cyclic order, possibly starting at a different vertex.
#[must_use]
pub fn rings_equivalent(a: &[Coord], b: &[Coord], tol: f64) -> bool {
    let open = |ring: &[Coord]| -> Vec<Coord> {
        match ring.split_last() {
            Some((last, rest)) if !rest.is_empty() && super::coords_close(*last, rest[0], tol) => {
                rotate_to_canonical_start(rest)
            }
            _ => rotate_to_canonical_start(ring),
        }
    };
    let (a, b) = (open(a), open(b));
    a.len() == b.len()
        && a
            .iter()
            .zip(&b)
            .all(|(p, q)| super::coords_close(*p, *q, tol))
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: Coord, b: Coord) -> Result<Vector2, GeometryError> {
    let d = vector_between(a, b);
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        )));
    }
    Ok(d / len)
}

/// Returns the right-pointing normal of a direction vector.
#[must_use]
pub fn right_normal(dir: Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_closed_square() {
        let pts = [c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0), c(1.0, 0.0), c(0.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[c(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = [c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0), c(0.0, 0.0)];
        let rotated = rotate_to_canonical_start(&pts);
        assert!(rotated[0].x.abs() < TOLERANCE);
        assert!(rotated[0].y.abs() < TOLERANCE);
        assert!((rotated[1].x - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn rings_equivalent_with_shifted_start() {
        let a = [c(0.0, 0.0), c(0.0, 10.0), c(10.0, 10.0), c(10.0, 0.0), c(0.0, 0.0)];
        let b = [c(10.0, 10.0), c(10.0, 0.0), c(0.0, 0.0), c(0.0, 10.0), c(10.0, 10.0)];
        assert!(rings_equivalent(&a, &b, 1e-9));
    }

    #[test]
    fn rings_equivalent_rejects_reversed() {
        let a = [c(0.0, 0.0), c(0.0, 10.0), c(10.0, 10.0), c(10.0, 0.0), c(0.0, 0.0)];
        let b = [c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)];
        assert!(!rings_equivalent(&a, &b, 1e-9));
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(c(0.0, 0.0), c(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        assert!(segment_direction(c(1.0, 1.0), c(1.0, 1.0)).is_err());
    }

    #[test]
    fn right_normal_basic() {
        let n = right_normal(Vector2::new(1.0, 0.0));
        assert!(n.x.abs() < TOLERANCE);
        assert!((n.y + 1.0).abs() < TOLERANCE);
    }
}
