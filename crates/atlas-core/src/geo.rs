// File: crates/atlas-core/src/geo.rs
// Summary: GeoJSON polygons, bounding boxes, point-in-polygon tests and the lon/lat-to-pixel projection.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::error::Result;
use crate::scale::LinearScale;
use crate::types::PlotRect;

/// A GeoJSON position; altitude and beyond are carried but unused.
pub type Position = Vec<f64>;
/// Closed (or implicitly closed) ring of positions.
pub type Ring = Vec<Position>;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Every polygon as its list of rings (outer ring first).
    pub fn polygons(&self) -> Vec<&[Ring]> {
        match self {
            Geometry::Polygon { coordinates } => vec![coordinates.as_slice()],
            Geometry::MultiPolygon { coordinates } => coordinates.iter().map(Vec::as_slice).collect(),
            Geometry::Unsupported => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, JsonValue>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Property as text: strings verbatim, numbers and booleans formatted, null/absent as `None`.
    pub fn property(&self, name: &str) -> Option<String> {
        match self.properties.as_ref()?.get(name)? {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(match n.as_f64() {
                Some(v) => format!("{v}"),
                None => n.to_string(),
            }),
            other => Some(other.to_string()),
        }
    }

    pub fn polygons(&self) -> Vec<&[Ring]> {
        self.geometry.as_ref().map(Geometry::polygons).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let fc = Self::parse_str(&text)?;
        debug!(path = %path.display(), features = fc.features.len(), "loaded geojson");
        Ok(fc)
    }

    pub fn parse_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Box around every polygon vertex of the collection.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::empty();
        for feature in &self.features {
            for polygon in feature.polygons() {
                for ring in polygon {
                    for p in ring.iter().filter(|p| p.len() >= 2) {
                        bbox.extend(p[0], p[1]);
                    }
                }
            }
        }
        bbox
    }
}

/// Axis-aligned box in lon/lat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub const fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.min_x <= self.max_x && self.min_y <= self.max_y)
    }

    pub fn extend(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() { return; }
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn union(mut self, other: &BoundingBox) -> Self {
        if !other.is_empty() {
            self.extend(other.min_x, other.min_y);
            self.extend(other.max_x, other.max_y);
        }
        self
    }
}

/// Even-odd ray cast of `point` against all rings of one polygon; holes subtract.
pub fn point_in_rings<R: AsRef<[(f64, f64)]>>(point: (f64, f64), rings: &[R]) -> bool {
    let (px, py) = point;
    let mut inside = false;
    for ring in rings {
        let ring = ring.as_ref();
        let n = ring.len();
        if n < 3 { continue; }
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = ring[i];
            let (xj, yj) = ring[j];
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
    }
    inside
}

/// Lon/lat to plot space, stretching the box independently along x and y onto the padded rectangle.
#[derive(Clone, Copy, Debug)]
pub struct MapProjection {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl MapProjection {
    pub fn new(bbox: &BoundingBox, rect: &PlotRect) -> Self {
        Self {
            x: LinearScale::new((bbox.min_x, bbox.max_x), rect.x_range()),
            y: LinearScale::new((bbox.min_y, bbox.max_y), rect.y_range()),
        }
    }

    #[inline]
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        (self.x.map(lon), self.y.map(lat))
    }

    /// Rings of one polygon in plot space; short positions are dropped.
    pub fn project_rings(&self, rings: &[Ring]) -> Vec<Vec<(f64, f64)>> {
        rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .filter(|p| p.len() >= 2)
                    .map(|p| self.project(p[0], p[1]))
                    .collect()
            })
            .collect()
    }
}
