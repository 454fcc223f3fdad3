pub mod direction;
pub mod lat_lon;
pub mod schema;
pub mod series_kind;
pub mod system_config;
