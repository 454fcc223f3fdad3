mod batch;
mod error;
mod pvgis;
mod record;
mod regions;
mod series_data;
mod types;

pub use error::{PvGisError, RegionFailure};
pub use pvgis::{PvGis, DEFAULT_REQUEST_TIMEOUT};

pub use batch::{download_regions, AreaFailure, BatchReport, RegionSeriesSource};
pub use record::{total_hours, RegionYearRecord};

pub use types::direction::Direction;
pub use types::lat_lon::LatLon;
pub use types::schema;
pub use types::series_kind::SeriesKind;
pub use types::system_config::{PvTechnology, SystemConfig, TrackingType};

pub use regions::error::{HierarchyError, LocateRegionError};
pub use regions::hierarchy::{NutsHierarchy, NutsRow};
pub use regions::locate_region::{nuts_level, RegionLocator};

pub use series_data::error::SeriesDataError;
pub use series_data::fetch::SeriesCalcClient;
pub use series_data::request::{PlaneOrientation, SeriesCalcRequest};
