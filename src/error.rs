use thiserror::Error;

/// Top-level error type for polygon slicing.
#[derive(Debug, Error)]
pub enum PolysliceError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Slice(#[from] SliceError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors raised by the planar geometry primitives.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Precondition violations on caller-supplied geometry or options.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{what} has {found} points, at least {min} required")]
    TooFewPoints {
        what: &'static str,
        found: usize,
        min: usize,
    },

    #[error("{what} contains a non-finite coordinate")]
    NonFiniteCoordinate { what: &'static str },

    #[error("polygon exterior is self-intersecting ({pieces} simple pieces)")]
    SelfIntersecting { pieces: usize },

    #[error("invalid slice options: {0}")]
    InvalidOptions(String),

    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),
}

/// Reasons a polygon/line pair could not be split.
///
/// Every variant is recoverable: the orchestrator reports it through
/// [`crate::geometry::Outcome::Unchanged`] instead of failing the call.
#[derive(Debug, Clone, Error)]
pub enum SliceError {
    #[error("no usable cutter: {remaining} line points left after trimming")]
    NoUsableCutter { remaining: usize },

    #[error("line crosses the polygon boundary {count} times, expected a positive even count")]
    OddOrZeroCrossing { count: usize },

    #[error("boolean difference failed")]
    DegenerateDifference(#[source] GeometryError),

    #[error("no fragment of the difference overlaps the splitter line")]
    NoQualifyingFragment,
}

/// Errors decoding or encoding the GeoJSON exchange format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid position: expected at least 2 finite numbers, got {0:?}")]
    Position(Vec<f64>),

    #[error("{what} has {found} positions, at least {min} required")]
    TooFewPositions {
        what: &'static str,
        found: usize,
        min: usize,
    },

    #[error("ring is not closed")]
    RingNotClosed,

    #[error("document contains no geometry")]
    Empty,
}

/// Convenience type alias for results using [`PolysliceError`].
pub type Result<T> = std::result::Result<T, PolysliceError>;
