//! Minimal GeoJSON model covering the geometry kinds the splitter reads and
//! writes.
//!
//! Only the first two numbers of a position are used; altitude and any
//! further members are dropped on conversion.

use geo::{Coord, LineString, MultiLineString, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FormatError;

/// A GeoJSON position: `[x, y]` with optional extra ordinates.
pub type Position = Vec<f64>;

/// A GeoJSON geometry object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
    MultiLineString(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureType {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureCollectionType {
    FeatureCollection,
}

/// A GeoJSON feature. `properties` is written as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: FeatureType,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl Feature {
    /// Creates a feature around `geometry` with no properties.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            kind: FeatureType::Feature,
            geometry: Some(geometry),
            properties: None,
            id: None,
        }
    }

    /// Sets one property, creating the property map if needed.
    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.to_owned(), value.into());
        self
    }
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: FeatureCollectionType,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a collection from `features`.
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: FeatureCollectionType::FeatureCollection,
            features,
        }
    }
}

/// Any top-level GeoJSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Feature(Feature),
    FeatureCollection(FeatureCollection),
    Geometry(Geometry),
}

impl Document {
    /// Parses a GeoJSON document.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Json` if the text is not one of the supported
    /// GeoJSON objects.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The document's geometry, or the first feature geometry of a collection.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Empty` if the document holds no geometry.
    pub fn into_geometry(self) -> Result<Geometry, FormatError> {
        match self {
            Document::Geometry(geometry) => Some(geometry),
            Document::Feature(feature) => feature.geometry,
            Document::FeatureCollection(collection) => collection
                .features
                .into_iter()
                .find_map(|feature| feature.geometry),
        }
        .ok_or(FormatError::Empty)
    }
}

impl Geometry {
    /// Converts to a `geo` geometry.
    ///
    /// # Errors
    ///
    /// - `FormatError::Position` for a position without 2 finite numbers.
    /// - `FormatError::RingNotClosed` or `FormatError::TooFewPositions` for
    ///   a polygon ring that is open or shorter than 4 positions.
    /// - `FormatError::Empty` for a polygon without rings.
    pub fn to_geo(&self) -> Result<geo::Geometry<f64>, FormatError> {
        Ok(match self {
            Geometry::Point(p) => Point(coord(p)?).into(),
            Geometry::LineString(line) => line_string(line)?.into(),
            Geometry::Polygon(rings) => polygon(rings)?.into(),
            Geometry::MultiLineString(lines) => MultiLineString::new(
                lines
                    .iter()
                    .map(|line| line_string(line))
                    .collect::<Result<_, _>>()?,
            )
            .into(),
            Geometry::MultiPolygon(polygons) => MultiPolygon::new(
                polygons
                    .iter()
                    .map(|rings| polygon(rings))
                    .collect::<Result<_, _>>()?,
            )
            .into(),
        })
    }
}

impl From<&LineString<f64>> for Geometry {
    fn from(line: &LineString<f64>) -> Self {
        Geometry::LineString(positions(line))
    }
}

impl From<&Polygon<f64>> for Geometry {
    fn from(polygon: &Polygon<f64>) -> Self {
        Geometry::Polygon(
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(positions)
                .collect(),
        )
    }
}

fn positions(line: &LineString<f64>) -> Vec<Position> {
    line.0.iter().map(|c| vec![c.x, c.y]).collect()
}

fn coord(position: &[f64]) -> Result<Coord<f64>, FormatError> {
    match position {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
        _ => Err(FormatError::Position(position.to_vec())),
    }
}

fn line_string(positions: &[Position]) -> Result<LineString<f64>, FormatError> {
    positions
        .iter()
        .map(|p| coord(p))
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

fn ring(positions: &[Position]) -> Result<LineString<f64>, FormatError> {
    let ring = line_string(positions)?;
    if ring.0.len() < 4 {
        return Err(FormatError::TooFewPositions {
            what: "polygon ring",
            found: ring.0.len(),
            min: 4,
        });
    }
    if !ring.is_closed() {
        return Err(FormatError::RingNotClosed);
    }
    Ok(ring)
}

fn polygon(rings: &[Vec<Position>]) -> Result<Polygon<f64>, FormatError> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(FormatError::Empty);
    };
    Ok(Polygon::new(
        ring(exterior)?,
        interiors
            .iter()
            .map(|r| ring(r))
            .collect::<Result<_, _>>()?,
    ))
}
