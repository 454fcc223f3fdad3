//! Minimal GeoJSON types for the GISCO NUTS boundary datasets.
//!
//! Only the parts of the format the resolver needs are modeled: a feature
//! collection of (Multi)Polygon features carrying a `NUTS_ID` property.
//! Coordinates are planar EPSG:3035 (easting, northing) pairs.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// The feature whose `NUTS_ID` equals `region`, if present.
    pub fn find(&self, region: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|feature| feature.properties.nuts_id == region)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    #[serde(rename = "NUTS_ID")]
    pub nuts_id: String,
}

/// A ring of planar coordinate pairs; closed per the GeoJSON convention.
pub type Ring = Vec<[f64; 2]>;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    /// Area-weighted centroid in the geometry's own (planar) coordinates.
    ///
    /// Holes subtract from their polygon; multipolygon parts are weighted by
    /// their net area. `None` when the geometry encloses no area.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let polygons: &[Vec<Ring>] = match self {
            Geometry::Polygon { coordinates } => std::slice::from_ref(coordinates),
            Geometry::MultiPolygon { coordinates } => coordinates,
        };

        let mut area_sum = 0.0;
        let mut cx_sum = 0.0;
        let mut cy_sum = 0.0;

        for rings in polygons {
            for (i, ring) in rings.iter().enumerate() {
                let (area, cx, cy) = ring_centroid(ring)?;
                // First ring is the exterior, the rest are holes.
                let sign = if i == 0 { 1.0 } else { -1.0 };
                area_sum += sign * area;
                cx_sum += sign * area * cx;
                cy_sum += sign * area * cy;
            }
        }

        if area_sum.abs() < f64::EPSILON {
            return None;
        }
        Some((cx_sum / area_sum, cy_sum / area_sum))
    }
}

/// Unsigned area and centroid of a single ring via the shoelace formula.
///
/// The centroid is independent of winding order; `None` for degenerate rings.
fn ring_centroid(ring: &Ring) -> Option<(f64, f64, f64)> {
    if ring.len() < 3 {
        return None;
    }

    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for window in ring.windows(2) {
        let [x0, y0] = window[0];
        let [x1, y1] = window[1];
        let cross = x0 * y1 - x1 * y0;
        twice_area += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }
    // Close the ring if the input does not repeat the first vertex.
    let [x0, y0] = ring[ring.len() - 1];
    let [x1, y1] = ring[0];
    if (x0, y0) != (x1, y1) {
        let cross = x0 * y1 - x1 * y0;
        twice_area += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }

    if twice_area.abs() < f64::EPSILON {
        return None;
    }
    let area = twice_area / 2.0;
    Some((area.abs(), cx / (6.0 * area), cy / (6.0 * area)))
}
