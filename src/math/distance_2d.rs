use super::Coord;

/// Returns the minimum distance from point `p` to the line segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(p: Coord, a: Coord, b: Coord) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p.x - a.x).hypot(p.y - a.y);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;

    (p.x - closest_x).hypot(p.y - closest_y)
}

/// Returns the Euclidean length of segment `a`-`b`.
#[must_use]
pub fn segment_length(a: Coord, b: Coord) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}
