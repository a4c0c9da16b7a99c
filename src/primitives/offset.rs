use geo::LineString;

use crate::error::GeometryError;
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::polygon_2d::{right_normal, segment_direction};
use crate::math::{coords_close, Coord, Vector2, TOLERANCE};

/// Maximum miter distance as a multiple of `|distance|`.
const MITER_LIMIT: f64 = 4.0;

/// A single offset segment with its unit direction.
struct OffsetSeg {
    start: Coord,
    end: Coord,
    dir: Vector2,
}

/// Offsets an open line by a signed perpendicular distance.
///
/// Positive distance offsets to the right of the direction of travel,
/// negative to the left. Consecutive segments are joined at the
/// intersection of their offsets; joins whose miter would reach farther
/// than `MITER_LIMIT * |distance|` from the source vertex are beveled.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the line has fewer than 2
/// distinct points.
pub fn offset_line(
    line: &LineString<f64>,
    distance: f64,
) -> Result<LineString<f64>, GeometryError> {
    let mut points: Vec<Coord> = Vec::with_capacity(line.0.len());
    for &c in &line.0 {
        if points.last().is_none_or(|p| !coords_close(*p, c, TOLERANCE)) {
            points.push(c);
        }
    }
    if points.len() < 2 {
        return Err(GeometryError::Degenerate(format!(
            "line has {} distinct points, at least 2 required for offset",
            points.len()
        )));
    }
    if distance.abs() < TOLERANCE {
        return Ok(LineString::new(points));
    }

    let mut segs = Vec::with_capacity(points.len() - 1);
    for w in points.windows(2) {
        let dir = segment_direction(w[0], w[1])?;
        let normal = right_normal(dir) * distance;
        segs.push(OffsetSeg {
            start: Coord {
                x: w[0].x + normal.x,
                y: w[0].y + normal.y,
            },
            end: Coord {
                x: w[1].x + normal.x,
                y: w[1].y + normal.y,
            },
            dir,
        });
    }

    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(segs[0].start);
    for i in 1..segs.len() {
        push_corner(&mut out, &segs[i - 1], &segs[i], points[i], distance);
    }
    out.push(segs[segs.len() - 1].end);

    Ok(LineString::new(out))
}

/// Appends the join between two consecutive offset segments.
fn push_corner(
    out: &mut Vec<Coord>,
    prev: &OffsetSeg,
    cur: &OffsetSeg,
    vertex: Coord,
    distance: f64,
) {
    match line_line_intersect_2d(prev.start, &prev.dir, cur.start, &cur.dir) {
        Some((t, _)) => {
            let corner = point_at(prev.start, &prev.dir, t);
            let reach = (corner.x - vertex.x).hypot(corner.y - vertex.y);
            if reach <= MITER_LIMIT * distance.abs() {
                out.push(corner);
            } else {
                out.push(prev.end);
                out.push(cur.start);
            }
        }
        None if prev.dir.dot(&cur.dir) > 0.0 => {
            // Collinear continuation.
            out.push(cur.start);
        }
        None => {
            // Full reversal: flat cap across the vertex.
            out.push(prev.end);
            out.push(cur.start);
        }
    }
}
