//! The typed region-year record and its tabular serialization.

use crate::error::RegionFailure;
use crate::types::direction::Direction;
use crate::types::schema;
use crate::types::series_kind::SeriesKind;
use chrono::NaiveDate;
use polars::prelude::*;

/// Hours in a year: 8784 for leap years, 8760 otherwise.
pub fn total_hours(year: i32) -> usize {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        8784
    } else {
        8760
    }
}

/// All six series of one region and year, validated to a common length.
///
/// Construction enforces the length invariant; [`RegionYearRecord::validate`]
/// enforces the non-degeneracy invariant. Only a record passing both is
/// turned into an output table.
#[derive(Debug, Clone)]
pub struct RegionYearRecord {
    region: String,
    year: i32,
    pv_generation: Vec<f64>,
    temperature: Vec<f64>,
    /// One series per compass direction, in [`Direction::ALL`] order.
    radiation: [Vec<f64>; 4],
}

impl RegionYearRecord {
    pub fn new(
        region: &str,
        year: i32,
        pv_generation: Vec<f64>,
        temperature: Vec<f64>,
        radiation: [Vec<f64>; 4],
    ) -> Result<Self, RegionFailure> {
        let expected = total_hours(year);
        check_length(region, SeriesKind::PvGeneration, &pv_generation, expected)?;
        check_length(region, SeriesKind::Temperature, &temperature, expected)?;
        for (series, direction) in radiation.iter().zip(Direction::ALL) {
            check_length(region, SeriesKind::Radiation(direction), series, expected)?;
        }
        Ok(Self {
            region: region.to_string(),
            year,
            pv_generation,
            temperature,
            radiation,
        })
    }

    /// Rejects the record if any series sums to zero.
    ///
    /// An all-zero series means the upstream source had no usable data for
    /// this region; the whole record is discarded rather than emitting a
    /// partially meaningless table.
    pub fn validate(&self) -> Result<(), RegionFailure> {
        self.check_sum(SeriesKind::PvGeneration, &self.pv_generation)?;
        self.check_sum(SeriesKind::Temperature, &self.temperature)?;
        for (series, direction) in self.radiation.iter().zip(Direction::ALL) {
            self.check_sum(SeriesKind::Radiation(direction), series)?;
        }
        Ok(())
    }

    fn check_sum(&self, kind: SeriesKind, series: &[f64]) -> Result<(), RegionFailure> {
        if series.iter().sum::<f64>() == 0.0 {
            return Err(RegionFailure::DegenerateSeries {
                region: self.region.clone(),
                series: kind,
            });
        }
        Ok(())
    }

    /// One row per hour, columns in [`schema::OUTPUT_COLUMNS`] order, hour
    /// index 1-based and contiguous.
    pub fn into_frame(self) -> Result<DataFrame, RegionFailure> {
        let hours = self.pv_generation.len();
        let id_hour: Vec<i64> = (1..=hours as i64).collect();
        let [south, east, west, north] = self.radiation;

        let frame = df!(
            schema::REGION => vec![self.region; hours],
            schema::YEAR => vec![self.year; hours],
            schema::ID_HOUR => id_hour,
            schema::PV_GENERATION => self.pv_generation,
            schema::PV_GENERATION_UNIT => vec![schema::PV_GENERATION_UNIT_STRING; hours],
            schema::TEMPERATURE => self.temperature,
            schema::TEMPERATURE_UNIT => vec![schema::TEMPERATURE_UNIT_STRING; hours],
            schema::RADIATION_SOUTH => south,
            schema::RADIATION_EAST => east,
            schema::RADIATION_WEST => west,
            schema::RADIATION_NORTH => north,
            schema::RADIATION_UNIT => vec![schema::RADIATION_UNIT_STRING; hours],
        )?;
        Ok(frame)
    }
}

fn check_length(
    region: &str,
    kind: SeriesKind,
    series: &[f64],
    expected: usize,
) -> Result<(), RegionFailure> {
    if series.len() != expected {
        return Err(RegionFailure::LengthMismatch {
            region: region.to_string(),
            series: kind,
            expected,
            found: series.len(),
        });
    }
    Ok(())
}
