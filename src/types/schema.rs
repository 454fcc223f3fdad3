//! Column names and unit strings of the output tables.
//!
//! Every component that touches the region-year table takes its column names
//! from here, so the schema is defined exactly once.

use crate::types::direction::Direction;

pub const REGION: &str = "region";
pub const YEAR: &str = "year";
pub const ID_HOUR: &str = "id_hour";
pub const PV_GENERATION: &str = "pv_generation";
pub const PV_GENERATION_UNIT: &str = "pv_generation_unit";
pub const TEMPERATURE: &str = "temperature";
pub const TEMPERATURE_UNIT: &str = "temperature_unit";
pub const RADIATION_SOUTH: &str = "radiation_south";
pub const RADIATION_EAST: &str = "radiation_east";
pub const RADIATION_WEST: &str = "radiation_west";
pub const RADIATION_NORTH: &str = "radiation_north";
pub const RADIATION_UNIT: &str = "radiation_unit";

/// Generation is normalized to installed capacity.
pub const PV_GENERATION_UNIT_STRING: &str = "W/kW_peak";
pub const TEMPERATURE_UNIT_STRING: &str = "°C";
pub const RADIATION_UNIT_STRING: &str = "W";

/// Column order of the serialized region-year table.
pub const OUTPUT_COLUMNS: [&str; 12] = [
    REGION,
    YEAR,
    ID_HOUR,
    PV_GENERATION,
    PV_GENERATION_UNIT,
    TEMPERATURE,
    TEMPERATURE_UNIT,
    RADIATION_SOUTH,
    RADIATION_EAST,
    RADIATION_WEST,
    RADIATION_NORTH,
    RADIATION_UNIT,
];

// Column names of the upstream seriescalc response.
pub const UPSTREAM_POWER: &str = "P";
pub const UPSTREAM_TEMPERATURE: &str = "T2m";
pub const UPSTREAM_BEAM_IRRADIANCE: &str = "Gb(i)";
pub const UPSTREAM_DIFFUSE_IRRADIANCE: &str = "Gd(i)";

/// The radiation column for one compass direction.
pub fn radiation_column(direction: Direction) -> &'static str {
    match direction {
        Direction::South => RADIATION_SOUTH,
        Direction::East => RADIATION_EAST,
        Direction::West => RADIATION_WEST,
        Direction::North => RADIATION_NORTH,
    }
}
