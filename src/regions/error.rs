use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateRegionError {
    #[error("Region code '{region}' does not map to a NUTS level in 0..=3")]
    InvalidNutsLevel { region: String },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to parse boundary GeoJSON from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Region '{region}' not found in boundary dataset {url}")]
    RegionNotFound { region: String, url: String },

    #[error("Boundary geometry of region '{region}' has no area")]
    DegenerateGeometry { region: String },
}

#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("Failed to open NUTS workbook '{0}'")]
    Workbook(PathBuf, #[source] calamine::XlsxError),

    #[error("NUTS workbook '{0}' contains no worksheet")]
    EmptyWorkbook(PathBuf),

    #[error("NUTS workbook '{file}' is missing the '{column}' column")]
    MissingColumn { file: PathBuf, column: String },
}
