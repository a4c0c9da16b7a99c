use geo::{MultiPolygon, Polygon};

use super::Side;

/// Shape of one side's surviving fragments.
#[derive(Debug, Clone, PartialEq)]
pub enum CutGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

/// Result of cutting a polygon on one side of the splitter line.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    pub side: Side,
    pub geometry: CutGeometry,
}

impl Cut {
    /// Wraps surviving fragments: one becomes a polygon, more a multi-polygon.
    ///
    /// Returns `None` when `fragments` is empty.
    #[must_use]
    pub fn from_fragments(side: Side, mut fragments: Vec<Polygon<f64>>) -> Option<Self> {
        let geometry = match fragments.len() {
            0 => return None,
            1 => CutGeometry::Polygon(fragments.remove(0)),
            _ => CutGeometry::MultiPolygon(MultiPolygon::new(fragments)),
        };
        Some(Self { side, geometry })
    }

    /// Number of polygon pieces this cut contributes.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        match &self.geometry {
            CutGeometry::Polygon(_) => 1,
            CutGeometry::MultiPolygon(mp) => mp.0.len(),
        }
    }

    /// Flattens the cut into individual polygons.
    #[must_use]
    pub fn into_pieces(self) -> Vec<Polygon<f64>> {
        match self.geometry {
            CutGeometry::Polygon(p) => vec![p],
            CutGeometry::MultiPolygon(mp) => mp.0,
        }
    }
}
