use crate::regions::error::{HierarchyError, LocateRegionError};
use crate::series_data::error::SeriesDataError;
use crate::types::series_kind::SeriesKind;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PvGisError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error("Failed to construct HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to write output file '{0}'")]
    WriteOutput(PathBuf, #[source] std::io::Error),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}

/// Why one region produced no region-year record.
///
/// The batch driver logs these and moves on; a failure never aborts the run.
#[derive(Debug, Error)]
pub enum RegionFailure {
    #[error(transparent)]
    Lookup(#[from] LocateRegionError),

    #[error("Series '{series}' is not available for region {region}")]
    SeriesUnavailable {
        region: String,
        series: SeriesKind,
        #[source]
        source: SeriesDataError,
    },

    #[error("Series '{series}' of region {region} sums to zero")]
    DegenerateSeries { region: String, series: SeriesKind },

    #[error("Series '{series}' of region {region} has {found} values, expected {expected}")]
    LengthMismatch {
        region: String,
        series: SeriesKind,
        expected: usize,
        found: usize,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
