use geo::{Geometry, LineString};
use tracing::debug;

use super::line_split::LineSplit;
use super::slice::{PolygonSlice, SliceOptions};
use crate::error::{InputError, Result};
use crate::geometry::SplitResult;

/// Output of [`split_geometry`], shaped by the kind of target.
#[derive(Debug, Clone)]
pub enum SplitPieces {
    Polygon(SplitResult),
    Line(Vec<LineString<f64>>),
}

/// Splits a polygon or line target with a splitter line.
///
/// Polygons go through [`PolygonSlice`], lines through [`LineSplit`].
///
/// # Errors
///
/// Returns `InputError::UnsupportedGeometry` for any other geometry kind,
/// and whatever the chosen operation rejects as malformed input.
pub fn split_geometry(
    target: Geometry<f64>,
    splitter: LineString<f64>,
    options: &SliceOptions,
) -> Result<SplitPieces> {
    match target {
        Geometry::Polygon(polygon) => {
            debug!("routing polygon target");
            PolygonSlice::new(polygon, splitter)
                .with_options(options.clone())
                .execute()
                .map(SplitPieces::Polygon)
        }
        Geometry::LineString(line) => {
            debug!("routing line target");
            LineSplit::new(line, splitter).execute().map(SplitPieces::Line)
        }
        other => Err(InputError::UnsupportedGeometry(kind(&other).to_owned()).into()),
    }
}

fn kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolysliceError;
    use geo::{point, polygon};

    fn splitter() -> LineString<f64> {
        LineString::from(vec![(5.0, 15.0), (5.0, -15.0)])
    }

    #[test]
    fn polygon_target_is_sliced() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 10.0),
            (x: 10.0, y: 10.0),
            (x: 10.0, y: 0.0),
        ];
        let pieces = split_geometry(square.into(), splitter(), &SliceOptions::default()).unwrap();
        let SplitPieces::Polygon(result) = pieces else {
            panic!("expected polygon pieces");
        };
        assert!(result.is_split());
        assert_eq!(result.pieces().len(), 2);
    }

    #[test]
    fn line_target_is_split() {
        let target = LineString::from(vec![(0.0, 0.0), (10.0, 0.0)]);
        let pieces = split_geometry(target.into(), splitter(), &SliceOptions::default()).unwrap();
        let SplitPieces::Line(lines) = pieces else {
            panic!("expected line pieces");
        };
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn point_target_is_unsupported() {
        let target = point!(x: 1.0, y: 1.0);
        let err = split_geometry(target.into(), splitter(), &SliceOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            PolysliceError::Input(InputError::UnsupportedGeometry(ref kind)) if kind == "Point"
        ));
    }
}
