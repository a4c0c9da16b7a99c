use crate::error::InputError;

/// Cutting-strip offset magnitudes tried in order, widest first.
pub const DEFAULT_OFFSET_LADDER: [f64; 3] = [0.01, 0.001, 0.0001];

/// Distance within which a fragment boundary counts as running along the splitter.
pub const DEFAULT_OVERLAP_TOLERANCE: f64 = 0.000_05;

/// What happens to interior rings of fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoleHandling {
    /// Every fragment keeps its holes.
    #[default]
    Preserve,
    /// Parts of a multi-part difference keep only their outer ring.
    DropFromMultipart,
}

/// Tunables for a slice operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceOptions {
    /// Strictly decreasing, positive offset magnitudes in the caller's units.
    pub offset_ladder: Vec<f64>,
    /// Distance within which a fragment edge counts as lying on the splitter.
    ///
    /// The boolean difference snaps coordinates to a grid scaled to the
    /// polygon's extent. The default holds for extents up to a few hundred
    /// kilometres in metre units; much larger extents need a proportionally
    /// larger tolerance, still below the smallest ladder magnitude.
    pub overlap_tolerance: f64,
    pub hole_handling: HoleHandling,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            offset_ladder: DEFAULT_OFFSET_LADDER.to_vec(),
            overlap_tolerance: DEFAULT_OVERLAP_TOLERANCE,
            hole_handling: HoleHandling::default(),
        }
    }
}

impl SliceOptions {
    /// Sets the strip offset magnitudes, widest first.
    #[must_use]
    pub fn with_offset_ladder(mut self, ladder: impl Into<Vec<f64>>) -> Self {
        self.offset_ladder = ladder.into();
        self
    }

    /// Sets the fragment overlap tolerance.
    #[must_use]
    pub fn with_overlap_tolerance(mut self, tolerance: f64) -> Self {
        self.overlap_tolerance = tolerance;
        self
    }

    /// Sets how fragment holes are treated.
    #[must_use]
    pub fn with_hole_handling(mut self, hole_handling: HoleHandling) -> Self {
        self.hole_handling = hole_handling;
        self
    }

    /// Checks the ladder and tolerance.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidOptions` if the ladder is empty, holds a
    /// non-finite or non-positive magnitude, or is not strictly decreasing,
    /// or if the overlap tolerance is not finite and positive.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.offset_ladder.is_empty() {
            return Err(InputError::InvalidOptions("offset ladder is empty".to_owned()));
        }
        if let Some(bad) = self
            .offset_ladder
            .iter()
            .find(|m| !m.is_finite() || **m <= 0.0)
        {
            return Err(InputError::InvalidOptions(format!(
                "offset magnitude {bad} must be finite and positive"
            )));
        }
        if self.offset_ladder.windows(2).any(|w| w[1] >= w[0]) {
            return Err(InputError::InvalidOptions(
                "offset ladder must be strictly decreasing".to_owned(),
            ));
        }
        if !self.overlap_tolerance.is_finite() || self.overlap_tolerance <= 0.0 {
            return Err(InputError::InvalidOptions(format!(
                "overlap tolerance {} must be finite and positive",
                self.overlap_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = SliceOptions::default();
        assert_eq!(options.offset_ladder, vec![0.01, 0.001, 0.0001]);
        assert!((options.overlap_tolerance - 0.000_05).abs() < 1e-15);
        assert_eq!(options.hole_handling, HoleHandling::Preserve);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn empty_ladder_is_rejected() {
        let options = SliceOptions::default().with_offset_ladder(Vec::new());
        assert!(matches!(options.validate(), Err(InputError::InvalidOptions(_))));
    }

    #[test]
    fn increasing_ladder_is_rejected() {
        let options = SliceOptions::default().with_offset_ladder([0.001, 0.01]);
        assert!(options.validate().is_err());
    }

    #[test]
    fn non_positive_magnitude_is_rejected() {
        let options = SliceOptions::default().with_offset_ladder([0.01, 0.0]);
        assert!(options.validate().is_err());
    }

    #[test]
    fn bad_tolerance_is_rejected() {
        assert!(SliceOptions::default()
            .with_overlap_tolerance(f64::NAN)
            .validate()
            .is_err());
        assert!(SliceOptions::default()
            .with_overlap_tolerance(-1.0)
            .validate()
            .is_err());
    }
}
