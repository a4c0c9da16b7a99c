use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::Polygon;

use crate::math::Coord;

/// Boundary-inclusive point-in-polygon test.
///
/// Points inside a hole are outside the polygon; points on any ring are inside.
#[must_use]
pub fn point_in_polygon(coord: Coord, polygon: &Polygon<f64>) -> bool {
    polygon.coordinate_position(&coord) != CoordPos::Outside
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, LineString};

    fn square_with_hole() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            vec![LineString::from(vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)])],
        )
    }

    #[test]
    fn interior_and_boundary_points_are_inside() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
        ];
        assert!(point_in_polygon(Coord { x: 5.0, y: 5.0 }, &square));
        assert!(point_in_polygon(Coord { x: 0.0, y: 5.0 }, &square));
        assert!(point_in_polygon(Coord { x: 10.0, y: 10.0 }, &square));
    }

    #[test]
    fn exterior_points_are_outside() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
        ];
        assert!(!point_in_polygon(Coord { x: 5.0, y: 15.0 }, &square));
        assert!(!point_in_polygon(Coord { x: -0.1, y: 5.0 }, &square));
    }

    #[test]
    fn hole_interior_is_outside_but_hole_boundary_is_inside() {
        let poly = square_with_hole();
        assert!(!point_in_polygon(Coord { x: 5.0, y: 5.0 }, &poly));
        assert!(point_in_polygon(Coord { x: 4.0, y: 5.0 }, &poly));
        assert!(point_in_polygon(Coord { x: 2.0, y: 2.0 }, &poly));
    }
}
