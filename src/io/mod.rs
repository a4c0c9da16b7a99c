//! Exchange formats for the command-line front end.

pub mod geojson;

pub use geojson::{Document, Feature, FeatureCollection, Geometry, Position};
