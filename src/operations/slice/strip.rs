use geo::{LineString, Polygon};
use tracing::trace;

use crate::error::GeometryError;
use crate::geometry::Side;
use crate::primitives::{is_simple, offset_line};

/// A thin polygon covering one side of the splitter line.
#[derive(Debug, Clone)]
pub struct Strip {
    pub polygon: Polygon<f64>,
    /// Offset magnitude the strip was built with.
    pub magnitude: f64,
    /// Whether the strip ring is free of self-intersections.
    pub simple: bool,
}

/// Builds the cutting strip for `side`, trying each ladder magnitude in order.
///
/// The strip ring runs along the line, back along its offset copy, and
/// closes at the line's start. The first magnitude giving a simple ring
/// wins; if none does, the strip built with the last magnitude is returned.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the ladder is empty or the line
/// has fewer than 2 distinct points.
pub fn build_strip(
    line: &LineString<f64>,
    side: Side,
    ladder: &[f64],
) -> Result<Strip, GeometryError> {
    let mut fallback = None;

    for &magnitude in ladder {
        let offset = offset_line(line, magnitude * side.sign())?;
        let polygon = close_strip(line, &offset);
        let simple = is_simple(&polygon);
        trace!(%side, magnitude, simple, "cutting strip attempt");

        let strip = Strip {
            polygon,
            magnitude,
            simple,
        };
        if simple {
            return Ok(strip);
        }
        fallback = Some(strip);
    }

    fallback.ok_or_else(|| GeometryError::Degenerate("offset ladder is empty".to_owned()))
}

/// Joins the line and its reversed offset into a closed ring.
fn close_strip(line: &LineString<f64>, offset: &LineString<f64>) -> Polygon<f64> {
    let mut coords = Vec::with_capacity(line.0.len() + offset.0.len() + 1);
    coords.extend_from_slice(&line.0);
    coords.extend(offset.0.iter().rev());
    coords.push(line.0[0]);
    Polygon::new(LineString::new(coords), Vec::new())
}
