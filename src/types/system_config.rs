//! PV system parameters shared by every request of a pipeline run.
//!
//! One immutable value handed to each request constructor, never mutated
//! between calls.

use std::fmt;

/// The PV cell technology accepted by the `pvtechchoice` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PvTechnology {
    CrystallineSilicon,
    Cis,
    CdTe,
    Unknown,
}

impl PvTechnology {
    pub(crate) fn api_value(&self) -> &'static str {
        match self {
            PvTechnology::CrystallineSilicon => "crystSi",
            PvTechnology::Cis => "CIS",
            PvTechnology::CdTe => "CdTe",
            PvTechnology::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PvTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_value())
    }
}

/// The sun-tracking mode accepted by the `trackingtype` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingType {
    Fixed,
    SingleHorizontalNorthSouth,
    TwoAxis,
    VerticalAxis,
    SingleHorizontalEastWest,
    SingleInclinedNorthSouth,
}

impl TrackingType {
    pub(crate) fn api_value(&self) -> u8 {
        match self {
            TrackingType::Fixed => 0,
            TrackingType::SingleHorizontalNorthSouth => 1,
            TrackingType::TwoAxis => 2,
            TrackingType::VerticalAxis => 3,
            TrackingType::SingleHorizontalEastWest => 4,
            TrackingType::SingleInclinedNorthSouth => 5,
        }
    }
}

/// PV system parameters, fixed for one pipeline run.
///
/// `mounting_angle` is the inclination from the horizontal plane used by the
/// temperature/irradiance requests; 90 degrees means a vertical plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemConfig {
    /// Rated system capacity in kW-peak; generation is scaled to it.
    pub peak_power_kw: f64,
    /// System losses in percent.
    pub loss_pct: f64,
    pub technology: PvTechnology,
    pub tracking: TrackingType,
    /// Plane inclination in degrees for the plane-of-array requests.
    pub mounting_angle: f64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            peak_power_kw: 1.0,
            loss_pct: 14.0,
            technology: PvTechnology::CrystallineSilicon,
            tracking: TrackingType::Fixed,
            mounting_angle: 90.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_parameters() {
        let config = SystemConfig::default();
        assert_eq!(config.peak_power_kw, 1.0);
        assert_eq!(config.loss_pct, 14.0);
        assert_eq!(config.technology.api_value(), "crystSi");
        assert_eq!(config.tracking.api_value(), 0);
        assert_eq!(config.mounting_angle, 90.0);
    }
}
