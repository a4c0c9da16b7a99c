use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{LineString, Polygon};

use crate::math::distance_2d::segment_length;
use crate::math::{coords_close, Coord, TOLERANCE};

/// Finds every point where `line` crosses or touches a ring of `polygon`.
///
/// Points are ordered along the line and deduplicated within [`TOLERANCE`],
/// so a line passing through a polygon vertex yields a single point there.
/// Collinear overlaps between a line segment and a ring edge yield no points.
#[must_use]
pub fn line_intersections(polygon: &Polygon<f64>, line: &LineString<f64>) -> Vec<Coord> {
    let mut hits: Vec<(usize, f64, Coord)> = Vec::new();

    for (k, seg) in line.lines().enumerate() {
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
            for edge in ring.lines() {
                if let Some(LineIntersection::SinglePoint { intersection, .. }) =
                    line_intersection(seg, edge)
                {
                    hits.push((k, segment_length(seg.start, intersection), intersection));
                }
            }
        }
    }

    hits.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut points: Vec<Coord> = Vec::with_capacity(hits.len());
    for (_, _, pt) in hits {
        if !points.iter().any(|p| coords_close(*p, pt, TOLERANCE)) {
            points.push(pt);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square() -> Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0), (x: 10.0, y: 0.0)]
    }

    #[test]
    fn vertical_line_crosses_twice_in_line_order() {
        let line = LineString::from(vec![(5.0, 15.0), (5.0, -15.0)]);
        let pts = line_intersections(&square(), &line);
        assert_eq!(pts.len(), 2);
        assert!((pts[0].y - 10.0).abs() < TOLERANCE);
        assert!(pts[1].y.abs() < TOLERANCE);
    }

    #[test]
    fn vertex_touch_counts_once() {
        let line = LineString::from(vec![(-5.0, 5.0), (5.0, -5.0)]);
        let pts = line_intersections(&square(), &line);
        assert_eq!(pts.len(), 1);
        assert!(coords_close(pts[0], Coord { x: 0.0, y: 0.0 }, 1e-9));
    }

    #[test]
    fn disjoint_line_has_no_crossings() {
        let line = LineString::from(vec![(20.0, 0.0), (20.0, 10.0)]);
        assert!(line_intersections(&square(), &line).is_empty());
    }

    #[test]
    fn hole_rings_are_crossed_too() {
        let poly = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            vec![LineString::from(vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)])],
        );
        let line = LineString::from(vec![(5.0, 15.0), (5.0, -15.0)]);
        assert_eq!(line_intersections(&poly, &line).len(), 4);
    }
}
