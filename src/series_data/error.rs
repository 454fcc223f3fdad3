use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesDataError {
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

    #[error("Response contained no data rows")]
    EmptyTable,

    #[error("Required column '{column}' not found in response")]
    MissingColumn { column: String },

    #[error("Value '{value}' in column '{column}' is not numeric")]
    NumericParse { column: String, value: String },

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
