//! The high-level client tying region lookup, series download and batch
//! output together for one target year.

use crate::batch::{download_regions, BatchReport, RegionSeriesSource};
use crate::error::{PvGisError, RegionFailure};
use crate::record::RegionYearRecord;
use crate::regions::hierarchy::NutsHierarchy;
use crate::regions::locate_region::RegionLocator;
use crate::series_data::error::SeriesDataError;
use crate::series_data::fetch::SeriesCalcClient;
use crate::series_data::parse::numeric_column;
use crate::series_data::request::SeriesCalcRequest;
use crate::types::direction::Direction;
use crate::types::schema;
use crate::types::series_kind::SeriesKind;
use crate::types::system_config::SystemConfig;
use bon::bon;
use log::debug;
use polars::prelude::DataFrame;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Default timeout per HTTP request; the upstream API can take well over a
/// minute to compute an hourly year.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Downloads hourly PV generation, temperature and irradiance series for
/// NUTS regions, one instance per target year.
///
/// # Examples
///
/// ```no_run
/// use pvgis_nuts::{NutsHierarchy, PvGis};
/// use std::path::Path;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let hierarchy = NutsHierarchy::from_xlsx("data/NUTS2021.xlsx")?;
///     let pvgis = PvGis::builder().year(2019).build()?;
///     let report = pvgis
///         .download_pv_gis()
///         .hierarchy(&hierarchy)
///         .countries(&["DE"])
///         .out_dir(Path::new("output"))
///         .call()
///         .await?;
///     println!("{} files written", report.files_written.len());
///     Ok(())
/// }
/// ```
pub struct PvGis {
    year: i32,
    system: SystemConfig,
    series: SeriesCalcClient,
    locator: RegionLocator,
}

#[bon]
impl PvGis {
    #[builder]
    pub fn new(
        year: i32,
        system: Option<SystemConfig>,
        request_timeout: Option<Duration>,
    ) -> Result<Self, PvGisError> {
        let client = Client::builder()
            .timeout(request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()
            .map_err(PvGisError::HttpClient)?;
        Ok(Self {
            year,
            system: system.unwrap_or_default(),
            series: SeriesCalcClient::new(client.clone()),
            locator: RegionLocator::new(client),
        })
    }

    /// Downloads all NUTS-3 subregions of the given countries and writes one
    /// CSV file per NUTS-1 area to `out_dir`.
    #[builder]
    pub async fn download_pv_gis(
        &self,
        hierarchy: &NutsHierarchy,
        countries: &[&str],
        out_dir: &Path,
    ) -> Result<BatchReport, PvGisError> {
        download_regions(self, hierarchy, countries, self.year, out_dir).await
    }

    /// The validated region-year table for one region.
    ///
    /// Issues five API calls: one PV generation request and one
    /// plane-of-array request per compass direction. Temperature rides along
    /// on the south-facing response. Radiation per direction is the sum of
    /// the beam and diffuse in-plane components.
    pub async fn region_record(&self, region: &str) -> Result<DataFrame, RegionFailure> {
        let coords = self.locator.geo_center(region).await?;
        debug!("Center of {}: {:?}", region, coords);

        let pv_request = SeriesCalcRequest::pv_generation(coords, self.year, &self.system);
        let pv_frame = self
            .series
            .fetch(&pv_request)
            .await
            .map_err(unavailable(region, SeriesKind::PvGeneration))?;
        let pv_generation = numeric_column(&pv_frame, schema::UPSTREAM_POWER)
            .map_err(unavailable(region, SeriesKind::PvGeneration))?;

        let mut temperature = Vec::new();
        let mut radiation: [Vec<f64>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        for (slot, direction) in radiation.iter_mut().zip(Direction::ALL) {
            let kind = SeriesKind::Radiation(direction);
            let request = SeriesCalcRequest::plane_of_array(
                coords,
                self.year,
                &self.system,
                direction.aspect(),
            );
            let frame = self
                .series
                .fetch(&request)
                .await
                .map_err(unavailable(region, kind))?;

            if direction == Direction::South {
                temperature = numeric_column(&frame, schema::UPSTREAM_TEMPERATURE)
                    .map_err(unavailable(region, SeriesKind::Temperature))?;
            }
            let beam = numeric_column(&frame, schema::UPSTREAM_BEAM_IRRADIANCE)
                .map_err(unavailable(region, kind))?;
            let diffuse = numeric_column(&frame, schema::UPSTREAM_DIFFUSE_IRRADIANCE)
                .map_err(unavailable(region, kind))?;
            *slot = beam.iter().zip(&diffuse).map(|(b, d)| b + d).collect();
        }

        let record =
            RegionYearRecord::new(region, self.year, pv_generation, temperature, radiation)?;
        record.validate()?;
        record.into_frame()
    }
}

impl RegionSeriesSource for PvGis {
    async fn region_frame(&self, region: &str) -> Result<DataFrame, RegionFailure> {
        self.region_record(region).await
    }
}

fn unavailable(
    region: &str,
    kind: SeriesKind,
) -> impl FnOnce(SeriesDataError) -> RegionFailure + '_ {
    move |source| RegionFailure::SeriesUnavailable {
        region: region.to_string(),
        series: kind,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_default_system_and_timeout() {
        let pvgis = PvGis::builder().year(2019).build().unwrap();
        assert_eq!(pvgis.year, 2019);
        assert_eq!(pvgis.system, SystemConfig::default());
    }

    #[test]
    fn builder_accepts_a_custom_system() {
        let system = SystemConfig {
            peak_power_kw: 5.0,
            ..SystemConfig::default()
        };
        let pvgis = PvGis::builder()
            .year(2016)
            .system(system)
            .request_timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        assert_eq!(pvgis.system.peak_power_kw, 5.0);
    }
}
