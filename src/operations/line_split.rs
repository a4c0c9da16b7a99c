use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::LineString;

use crate::error::{InputError, Result};
use crate::math::distance_2d::segment_length;
use crate::math::{coords_close, is_finite, Coord, TOLERANCE};

/// Splits a line at every point where a splitter line crosses or touches it.
///
/// Pieces follow the target's direction. Cut points landing on an existing
/// vertex or on the target's ends never produce zero-length pieces. A target
/// the splitter misses comes back as a single piece.
#[derive(Debug, Clone)]
pub struct LineSplit {
    target: LineString<f64>,
    splitter: LineString<f64>,
}

impl LineSplit {
    /// Creates a new `LineSplit` operation.
    #[must_use]
    pub fn new(target: LineString<f64>, splitter: LineString<f64>) -> Self {
        Self { target, splitter }
    }

    /// Executes the split.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if either line has fewer than 2 points or holds
    /// a non-finite coordinate.
    pub fn execute(&self) -> Result<Vec<LineString<f64>>> {
        check("target line", &self.target)?;
        check("splitter line", &self.splitter)?;

        let cuts = self.cut_points();
        if cuts.is_empty() {
            return Ok(vec![self.target.clone()]);
        }

        let mut pieces = Vec::with_capacity(cuts.len() + 1);
        let mut current: Vec<Coord> = vec![self.target.0[0]];
        let mut next_cut = cuts.iter().peekable();

        for (k, seg) in self.target.lines().enumerate() {
            while let Some(&&(_, _, pt)) = next_cut.peek().filter(|c| c.0 == k) {
                push_distinct(&mut current, pt);
                finish_piece(&mut pieces, std::mem::replace(&mut current, vec![pt]));
                next_cut.next();
            }
            push_distinct(&mut current, seg.end);
        }
        finish_piece(&mut pieces, current);

        Ok(pieces)
    }

    /// Cut points as `(segment index, distance along segment, point)`, in
    /// order along the target.
    fn cut_points(&self) -> Vec<(usize, f64, Coord)> {
        let mut hits: Vec<(usize, f64, Coord)> = Vec::new();
        for (k, seg) in self.target.lines().enumerate() {
            for edge in self.splitter.lines() {
                if let Some(LineIntersection::SinglePoint { intersection, .. }) =
                    line_intersection(seg, edge)
                {
                    hits.push((k, segment_length(seg.start, intersection), intersection));
                }
            }
        }
        hits.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
        hits.dedup_by(|b, a| coords_close(a.2, b.2, TOLERANCE));
        hits
    }
}

fn check(what: &'static str, line: &LineString<f64>) -> std::result::Result<(), InputError> {
    if line.0.len() < 2 {
        return Err(InputError::TooFewPoints {
            what,
            found: line.0.len(),
            min: 2,
        });
    }
    if !line.0.iter().copied().all(is_finite) {
        return Err(InputError::NonFiniteCoordinate { what });
    }
    Ok(())
}

fn push_distinct(coords: &mut Vec<Coord>, pt: Coord) {
    if coords.last().is_none_or(|last| !coords_close(*last, pt, TOLERANCE)) {
        coords.push(pt);
    }
}

/// Keeps a piece only if it spans a non-zero length.
fn finish_piece(pieces: &mut Vec<LineString<f64>>, coords: Vec<Coord>) {
    if coords.len() >= 2 {
        pieces.push(LineString::new(coords));
    }
}
