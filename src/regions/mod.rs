pub mod error;
pub mod geojson;
pub mod hierarchy;
pub mod locate_region;
pub mod projection;
