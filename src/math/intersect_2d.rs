use super::{vector_between, Coord, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: Coord,
    d1: &Vector2,
    p2: Coord,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if cross.abs() < TOLERANCE {
        return None;
    }
    let delta = vector_between(p1, p2);
    let t = delta.perp(d2) / cross;
    let u = delta.perp(d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel and collinear segments never intersect here.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: Coord,
    a1: Coord,
    b0: Coord,
    b1: Coord,
) -> Option<(Coord, f64, f64)> {
    let da = vector_between(a0, a1);
    let db = vector_between(b0, b1);
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some((point_at(a0, &da, t), t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: Coord, dir: &Vector2, t: f64) -> Coord {
    Coord {
        x: origin.x + dir.x * t,
        y: origin.y + dir.y * t,
    }
}
