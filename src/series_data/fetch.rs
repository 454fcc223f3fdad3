//! HTTP access to the PVGIS `seriescalc` endpoint.

use crate::series_data::error::SeriesDataError;
use crate::series_data::parse::parse_series_csv;
use crate::series_data::request::{SeriesCalcRequest, SERIESCALC_URL};
use log::{debug, warn};
use polars::prelude::DataFrame;
use reqwest::Client;

pub struct SeriesCalcClient {
    client: Client,
    base_url: String,
}

impl SeriesCalcClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: SERIESCALC_URL.to_string(),
        }
    }

    /// Executes one request and parses the CSV body into a table.
    ///
    /// One request is in flight at a time; the caller decides whether an
    /// HTTP failure is fatal or just "no data for this region".
    pub async fn fetch(&self, request: &SeriesCalcRequest) -> Result<DataFrame, SeriesDataError> {
        let http_request = self
            .client
            .get(&self.base_url)
            .query(&request.query_pairs())
            .build()
            .map_err(|e| SeriesDataError::NetworkRequest(self.base_url.clone(), e))?;
        let url = http_request.url().to_string();
        debug!("Requesting {}", url);

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| SeriesDataError::NetworkRequest(url.clone(), e))?;
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    SeriesDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    SeriesDataError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| SeriesDataError::BodyRead(url, e))?;
        parse_series_csv(&body)
    }
}
