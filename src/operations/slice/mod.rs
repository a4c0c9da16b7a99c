mod cut;
pub mod options;
mod strip;
mod trim;
mod validate;

use geo::{LineString, Polygon};
use tracing::debug;

use crate::error::{Result, SliceError};
use crate::geometry::{Cut, Side, SplitResult};

pub use cut::{cut, select_fragments};
pub use options::{HoleHandling, SliceOptions};
pub use strip::{build_strip, Strip};
pub use trim::trim;
pub use validate::{check_line, check_polygon};

/// Splits a polygon along a splitter line.
///
/// The line is trimmed to the span that leaves the polygon, then the polygon
/// is cut once per side. Only when both sides succeed is the result a split;
/// any failure returns the original polygon untouched, with the reason kept
/// in the result's [`Outcome`](crate::geometry::Outcome).
#[derive(Debug, Clone)]
pub struct PolygonSlice {
    polygon: Polygon<f64>,
    line: LineString<f64>,
    options: SliceOptions,
}

impl PolygonSlice {
    /// Creates a new `PolygonSlice` operation with default options.
    #[must_use]
    pub fn new(polygon: Polygon<f64>, line: LineString<f64>) -> Self {
        Self {
            polygon,
            line,
            options: SliceOptions::default(),
        }
    }

    /// Replaces the default options.
    #[must_use]
    pub fn with_options(mut self, options: SliceOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the slice.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the polygon exterior has fewer than 4 points,
    /// holds non-finite coordinates or crosses itself, if the line has fewer
    /// than 2 points or non-finite coordinates, or if the options are invalid.
    /// A pair that merely cannot be split is not an error.
    pub fn execute(&self) -> Result<SplitResult> {
        check_polygon(&self.polygon)?;
        check_line(&self.line)?;
        self.options.validate()?;

        let line = match trim(&self.polygon, &self.line) {
            Ok(line) => line,
            Err(reason) => return Ok(self.unchanged(None, reason)),
        };

        match self.cut_both(&line) {
            (Ok(upper), Ok(lower)) => {
                debug!(
                    upper = upper.piece_count(),
                    lower = lower.piece_count(),
                    "polygon split"
                );
                Ok(SplitResult::split(upper, lower))
            }
            (Err(reason), _) => Ok(self.unchanged(Some(Side::Upper), reason)),
            (_, Err(reason)) => Ok(self.unchanged(Some(Side::Lower), reason)),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn cut_both(&self, line: &LineString<f64>) -> (CutResult, CutResult) {
        (
            cut(&self.polygon, line, Side::Upper, &self.options),
            cut(&self.polygon, line, Side::Lower, &self.options),
        )
    }

    #[cfg(feature = "parallel")]
    fn cut_both(&self, line: &LineString<f64>) -> (CutResult, CutResult) {
        rayon::join(
            || cut(&self.polygon, line, Side::Upper, &self.options),
            || cut(&self.polygon, line, Side::Lower, &self.options),
        )
    }

    fn unchanged(&self, side: Option<Side>, reason: SliceError) -> SplitResult {
        debug!(side = ?side, %reason, "polygon left unchanged");
        SplitResult::unchanged(self.polygon.clone(), side, reason)
    }
}

type CutResult = std::result::Result<Cut, SliceError>;

/// Splits `polygon` along `line` with default options.
///
/// # Errors
///
/// See [`PolygonSlice::execute`].
pub fn split_polygon(polygon: &Polygon<f64>, line: &LineString<f64>) -> Result<SplitResult> {
    PolygonSlice::new(polygon.clone(), line.clone()).execute()
}
