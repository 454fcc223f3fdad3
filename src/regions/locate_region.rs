//! Resolves a NUTS region code to a representative geographic coordinate.
//!
//! One boundary dataset exists per NUTS level; the resolver downloads the
//! level's GeoJSON, picks the matching feature, takes the centroid of its
//! boundary polygon in EPSG:3035 and reprojects it to latitude/longitude.

use crate::regions::error::LocateRegionError;
use crate::regions::geojson::FeatureCollection;
use crate::regions::projection::LambertAzimuthal;
use crate::types::lat_lon::LatLon;
use log::debug;
use reqwest::Client;

const GISCO_BASE_URL: &str = "https://gisco-services.ec.europa.eu/distribution/v2/nuts/geojson";

/// The NUTS level encoded in a region code: country codes are two characters,
/// each further level appends one.
pub fn nuts_level(region: &str) -> Result<u8, LocateRegionError> {
    let length = region.chars().count();
    match length.checked_sub(2) {
        Some(level @ 0..=3) => Ok(level as u8),
        _ => Err(LocateRegionError::InvalidNutsLevel {
            region: region.to_string(),
        }),
    }
}

pub struct RegionLocator {
    client: Client,
    base_url: String,
    projection: LambertAzimuthal,
}

impl RegionLocator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: GISCO_BASE_URL.to_string(),
            projection: LambertAzimuthal::etrs89_laea(),
        }
    }

    fn dataset_url(&self, level: u8) -> String {
        format!("{}/NUTS_RG_60M_2021_3035_LEVL_{}.geojson", self.base_url, level)
    }

    /// The geographic centroid of a region's boundary polygon.
    ///
    /// The boundary service keeps one dataset per level and caches it
    /// upstream; this resolver re-fetches per call and keeps no state.
    pub async fn geo_center(&self, region: &str) -> Result<LatLon, LocateRegionError> {
        let level = nuts_level(region)?;
        let url = self.dataset_url(level);
        debug!("Resolving centroid of {} from {}", region, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LocateRegionError::NetworkRequest(url.clone(), e))?;
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    LocateRegionError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    LocateRegionError::NetworkRequest(url, e)
                });
            }
        };
        let body = response
            .text()
            .await
            .map_err(|e| LocateRegionError::BodyRead(url.clone(), e))?;

        let collection: FeatureCollection = serde_json::from_str(&body)
            .map_err(|e| LocateRegionError::JsonParse {
                url: url.clone(),
                source: e,
            })?;

        let feature = collection
            .find(region)
            .ok_or_else(|| LocateRegionError::RegionNotFound {
                region: region.to_string(),
                url,
            })?;

        let (easting, northing) =
            feature
                .geometry
                .centroid()
                .ok_or_else(|| LocateRegionError::DegenerateGeometry {
                    region: region.to_string(),
                })?;

        let (lat, lon) = self.projection.inverse(easting, northing);
        Ok(LatLon(lat, lon))
    }
}
