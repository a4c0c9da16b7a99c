use geo::Polygon;

use super::{Cut, Side};
use crate::error::SliceError;

/// How a split request ended.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The polygon was cut; pieces hold the upper side followed by the lower side.
    Split,
    /// No cut was possible; pieces hold the original polygon.
    ///
    /// `side` names the direction whose cut failed first, if the failure
    /// happened after trimming.
    Unchanged {
        side: Option<Side>,
        reason: SliceError,
    },
}

/// Ordered polygon pieces produced by a split request.
#[derive(Debug, Clone)]
pub struct SplitResult {
    pieces: Vec<Polygon<f64>>,
    outcome: Outcome,
}

impl SplitResult {
    /// Concatenates both sides' pieces, upper first.
    #[must_use]
    pub fn split(upper: Cut, lower: Cut) -> Self {
        let mut pieces = upper.into_pieces();
        pieces.extend(lower.into_pieces());
        Self {
            pieces,
            outcome: Outcome::Split,
        }
    }

    /// Returns the original polygon untouched, recording why.
    #[must_use]
    pub fn unchanged(original: Polygon<f64>, side: Option<Side>, reason: SliceError) -> Self {
        Self {
            pieces: vec![original],
            outcome: Outcome::Unchanged { side, reason },
        }
    }

    /// The pieces, upper side first when split.
    #[must_use]
    pub fn pieces(&self) -> &[Polygon<f64>] {
        &self.pieces
    }

    /// Consumes the result, returning its pieces.
    #[must_use]
    pub fn into_pieces(self) -> Vec<Polygon<f64>> {
        self.pieces
    }

    /// How the request ended.
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns `true` if the polygon was actually cut.
    #[must_use]
    pub fn is_split(&self) -> bool {
        matches!(self.outcome, Outcome::Split)
    }

    /// The failure that left the polygon unchanged, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&SliceError> {
        match &self.outcome {
            Outcome::Split => None,
            Outcome::Unchanged { reason, .. } => Some(reason),
        }
    }
}
