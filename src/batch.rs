//! Walks the region hierarchy and writes one CSV file per country area.
//!
//! Failures are confined to the smallest useful scope: a failed subregion is
//! skipped with a warning, an area where every subregion failed produces no
//! file, and only I/O or table-assembly problems abort the run.

use crate::error::{PvGisError, RegionFailure};
use crate::regions::hierarchy::NutsHierarchy;
use log::{info, warn};
use polars::prelude::*;
use std::fs;
use std::fs::File;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Anything that can produce the region-year table for one subregion.
///
/// The production implementation talks to the remote API; tests substitute
/// an in-memory source.
pub trait RegionSeriesSource {
    fn region_frame(
        &self,
        region: &str,
    ) -> impl Future<Output = Result<DataFrame, RegionFailure>>;
}

/// An area for which no subregion yielded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaFailure {
    pub country: String,
    pub area: String,
    pub year: i32,
}

/// What a batch run produced and what it had to skip.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Years with at least one area that produced no data, deduplicated.
    pub years_missing_data: Vec<i32>,
    pub failed_areas: Vec<AreaFailure>,
    pub files_written: Vec<PathBuf>,
}

/// Downloads all NUTS-3 subregions of the given countries for one year and
/// writes one file per NUTS-1 area to `out_dir`.
pub async fn download_regions<S: RegionSeriesSource>(
    source: &S,
    hierarchy: &NutsHierarchy,
    countries: &[&str],
    year: i32,
    out_dir: &Path,
) -> Result<BatchReport, PvGisError> {
    fs::create_dir_all(out_dir)
        .map_err(|e| PvGisError::WriteOutput(out_dir.to_path_buf(), e))?;

    let mut report = BatchReport::default();
    for &country in countries {
        for area in hierarchy.level1_areas(country) {
            let subregions = hierarchy.level3_subregions(area);
            info!(
                "Downloading {} subregions of {} ({}) for {}",
                subregions.len(),
                area,
                country,
                year
            );

            let mut combined: Option<DataFrame> = None;
            for subregion in subregions {
                match source.region_frame(subregion).await {
                    Ok(frame) => match combined {
                        Some(ref mut acc) => {
                            acc.vstack_mut(&frame)?;
                        }
                        None => combined = Some(frame),
                    },
                    Err(failure) => warn!("Skipping {}: {}", subregion, failure),
                }
            }

            let Some(mut frame) = combined else {
                warn!("No subregion of {} produced data for {}", area, year);
                report.failed_areas.push(AreaFailure {
                    country: country.to_string(),
                    area: area.to_string(),
                    year,
                });
                if !report.years_missing_data.contains(&year) {
                    report.years_missing_data.push(year);
                }
                continue;
            };

            let path = out_dir.join(format!("pv_gis_{country}_{area}_{year}_nuts3.csv"));
            let file =
                File::create(&path).map_err(|e| PvGisError::WriteOutput(path.clone(), e))?;
            CsvWriter::new(file)
                .include_header(true)
                .with_separator(b',')
                .finish(&mut frame)?;
            info!("Wrote {} rows to {:?}", frame.height(), path);
            report.files_written.push(path);
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{total_hours, RegionYearRecord};
    use crate::regions::hierarchy::NutsRow;
    use crate::types::series_kind::SeriesKind;

    struct FakeSource {
        year: i32,
        failing: Vec<&'static str>,
    }

    impl RegionSeriesSource for FakeSource {
        async fn region_frame(&self, region: &str) -> Result<DataFrame, RegionFailure> {
            if self.failing.contains(&region) {
                return Err(RegionFailure::DegenerateSeries {
                    region: region.to_string(),
                    series: SeriesKind::PvGeneration,
                });
            }
            let hours = total_hours(self.year);
            RegionYearRecord::new(
                region,
                self.year,
                vec![100.0; hours],
                vec![8.0; hours],
                [
                    vec![70.0; hours],
                    vec![35.0; hours],
                    vec![36.0; hours],
                    vec![10.0; hours],
                ],
            )?
            .into_frame()
        }
    }

    fn hierarchy() -> NutsHierarchy {
        let row = |nuts1: &str, nuts3: &str| NutsRow {
            nuts0: "DE".to_string(),
            nuts1: nuts1.to_string(),
            nuts3: nuts3.to_string(),
        };
        NutsHierarchy::from_rows(vec![
            row("DE1", "DE111"),
            row("DE1", "DE112"),
            row("DE1", "DE113"),
        ])
    }

    #[tokio::test]
    async fn failed_subregions_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            year: 2016,
            failing: vec!["DE112"],
        };

        let report = download_regions(&source, &hierarchy(), &["DE"], 2016, dir.path())
            .await
            .unwrap();

        assert!(report.years_missing_data.is_empty());
        assert!(report.failed_areas.is_empty());
        assert_eq!(report.files_written.len(), 1);

        let path = &report.files_written[0];
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "pv_gis_DE_DE1_2016_nuts3.csv"
        );
        let df = CsvReadOptions::default()
            .try_into_reader_with_file_path(Some(path.clone()))
            .unwrap()
            .finish()
            .unwrap();
        // Two surviving subregions of a leap year.
        assert_eq!(df.height(), 2 * 8784);
        let regions = df.column("region").unwrap();
        let regions = regions.as_materialized_series().str().unwrap();
        assert_eq!(regions.get(0), Some("DE111"));
        assert_eq!(regions.get(8784), Some("DE113"));
    }

    #[tokio::test]
    async fn area_with_no_data_is_reported_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            year: 2019,
            failing: vec!["DE111", "DE112", "DE113"],
        };

        let report = download_regions(&source, &hierarchy(), &["DE"], 2019, dir.path())
            .await
            .unwrap();

        assert!(report.files_written.is_empty());
        assert_eq!(report.years_missing_data, [2019]);
        assert_eq!(
            report.failed_areas,
            [AreaFailure {
                country: "DE".to_string(),
                area: "DE1".to_string(),
                year: 2019,
            }]
        );
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn unknown_country_produces_an_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            year: 2019,
            failing: vec![],
        };

        let report = download_regions(&source, &hierarchy(), &["FR"], 2019, dir.path())
            .await
            .unwrap();

        assert!(report.files_written.is_empty());
        assert!(report.failed_areas.is_empty());
        assert!(report.years_missing_data.is_empty());
    }
}
