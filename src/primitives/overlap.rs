use geo::{Line, LineString, Polygon};

use crate::math::distance_2d::{point_to_segment_dist, segment_length};

/// Returns `true` if some boundary segment of `polygon` runs along `line`.
///
/// Two segments run along each other when both endpoints of one lie within
/// `tolerance` of the other. Every ring counts as boundary. Segments shorter
/// than `tolerance` are ignored.
#[must_use]
pub fn boundary_overlap(polygon: &Polygon<f64>, line: &LineString<f64>, tolerance: f64) -> bool {
    let usable = |seg: &Line<f64>| segment_length(seg.start, seg.end) >= tolerance;
    let cutter: Vec<Line<f64>> = line.lines().filter(usable).collect();

    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.lines())
        .filter(usable)
        .any(|edge| cutter.iter().any(|seg| segments_overlap(&edge, seg, tolerance)))
}

fn segments_overlap(a: &Line<f64>, b: &Line<f64>, tolerance: f64) -> bool {
    let within = |s: &Line<f64>, on: &Line<f64>| {
        point_to_segment_dist(s.start, on.start, on.end) <= tolerance
            && point_to_segment_dist(s.end, on.start, on.end) <= tolerance
    };
    within(a, b) || within(b, a)
}
