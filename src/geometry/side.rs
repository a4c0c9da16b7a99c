use std::fmt;

/// The side of the splitter line a cutting strip is offset to.
///
/// `Upper` offsets to the right of the line's direction of travel and so
/// keeps the fragment on its left; `Lower` is the mirror image. Running both
/// sides yields the two halves of a cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Upper,
    Lower,
}

impl Side {
    /// Sign applied to the offset distance: `+1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Side::Upper => 1.0,
            Side::Lower => -1.0,
        }
    }

    /// Descriptive tag attached to multi-part results.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Side::Upper => "upper",
            Side::Lower => "lower",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_is_positive_and_tagged() {
        assert!((Side::Upper.sign() - 1.0).abs() < f64::EPSILON);
        assert!((Side::Lower.sign() + 1.0).abs() < f64::EPSILON);
        assert_eq!(Side::Upper.to_string(), "upper");
        assert_eq!(Side::Lower.id(), "lower");
    }
}
