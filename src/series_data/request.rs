//! Query parameters for one `seriescalc` API call.
//!
//! A request is an immutable value built for exactly one call; the two modes
//! the pipeline uses (PV generation, plane-of-array temperature/irradiance)
//! each have a constructor. One `year` field feeds both `startyear` and
//! `endyear`: the API only keeps row counts aligned when the two are equal,
//! so a diverging range is simply not representable.

use crate::types::lat_lon::LatLon;
use crate::types::system_config::SystemConfig;

pub const SERIESCALC_URL: &str = "https://re.jrc.ec.europa.eu/api/v5_2/seriescalc";

/// Inclination and orientation of the requested plane, for the
/// temperature/irradiance mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneOrientation {
    /// Inclination from the horizontal, in degrees.
    pub angle: f64,
    /// Orientation relative to true south, in degrees (0 south, -90 east,
    /// 90 west, -180 north).
    pub aspect: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesCalcRequest {
    coords: LatLon,
    year: i32,
    pv_calculation: bool,
    optimal_inclination: bool,
    optimal_angles: bool,
    system: SystemConfig,
    plane: Option<PlaneOrientation>,
}

impl SeriesCalcRequest {
    /// A PV generation request: hourly power output of an optimally
    /// inclined and oriented system.
    pub fn pv_generation(coords: LatLon, year: i32, system: &SystemConfig) -> Self {
        Self {
            coords,
            year,
            pv_calculation: true,
            optimal_inclination: true,
            optimal_angles: true,
            system: *system,
            plane: None,
        }
    }

    /// A plane-of-array request: air temperature and irradiance components
    /// on a fixed plane at the system's mounting angle, facing `aspect`.
    pub fn plane_of_array(coords: LatLon, year: i32, system: &SystemConfig, aspect: i32) -> Self {
        Self {
            coords,
            year,
            pv_calculation: false,
            optimal_inclination: false,
            optimal_angles: false,
            system: *system,
            plane: Some(PlaneOrientation {
                angle: system.mounting_angle,
                aspect,
            }),
        }
    }

    /// The request as URL query pairs, in the API's documented order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lat", self.coords.0.to_string()),
            ("lon", self.coords.1.to_string()),
            ("startyear", self.year.to_string()),
            ("endyear", self.year.to_string()),
            ("pvcalculation", flag(self.pv_calculation)),
            ("peakpower", self.system.peak_power_kw.to_string()),
            ("loss", self.system.loss_pct.to_string()),
            ("pvtechchoice", self.system.technology.api_value().to_string()),
            ("components", "1".to_string()),
            ("trackingtype", self.system.tracking.api_value().to_string()),
            ("optimalinclination", flag(self.optimal_inclination)),
            ("optimalangles", flag(self.optimal_angles)),
        ];
        if let Some(plane) = self.plane {
            pairs.push(("angle", plane.angle.to_string()));
            pairs.push(("aspect", plane.aspect.to_string()));
        }
        pairs
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pairs_map(request: &SeriesCalcRequest) -> HashMap<&'static str, String> {
        request.query_pairs().into_iter().collect()
    }

    #[test]
    fn pv_generation_mode_enables_calculation_and_optimal_flags() {
        let request =
            SeriesCalcRequest::pv_generation(LatLon(48.7, 9.1), 2019, &SystemConfig::default());
        let pairs = pairs_map(&request);
        assert_eq!(pairs["pvcalculation"], "1");
        assert_eq!(pairs["optimalinclination"], "1");
        assert_eq!(pairs["optimalangles"], "1");
        assert_eq!(pairs["peakpower"], "1");
        assert_eq!(pairs["loss"], "14");
        assert_eq!(pairs["pvtechchoice"], "crystSi");
        assert_eq!(pairs["trackingtype"], "0");
        assert_eq!(pairs["components"], "1");
        assert!(!pairs.contains_key("angle"));
        assert!(!pairs.contains_key("aspect"));
    }

    #[test]
    fn plane_of_array_mode_fixes_the_plane() {
        let request = SeriesCalcRequest::plane_of_array(
            LatLon(48.7, 9.1),
            2019,
            &SystemConfig::default(),
            -90,
        );
        let pairs = pairs_map(&request);
        assert_eq!(pairs["pvcalculation"], "0");
        assert_eq!(pairs["optimalinclination"], "0");
        assert_eq!(pairs["optimalangles"], "0");
        assert_eq!(pairs["angle"], "90");
        assert_eq!(pairs["aspect"], "-90");
    }

    #[test]
    fn start_and_end_year_are_always_equal() {
        let request =
            SeriesCalcRequest::pv_generation(LatLon(48.7, 9.1), 2016, &SystemConfig::default());
        let pairs = pairs_map(&request);
        assert_eq!(pairs["startyear"], pairs["endyear"]);
        assert_eq!(pairs["startyear"], "2016");
    }
}
