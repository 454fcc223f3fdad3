//! Parser for the semi-structured `seriescalc` CSV body.
//!
//! The response mixes free-form metadata lines, one header line, data rows
//! and a footer, and the number of columns varies with the requested
//! parameters. The cleanup contract: read up to 20 candidate columns, drop
//! columns that are empty in every row, drop rows with any empty cell in
//! the surviving columns, then promote the first remaining row to header.

use crate::series_data::error::SeriesDataError;
use polars::prelude::*;

/// Upper bound on columns the API is known to return.
const MAX_COLUMNS: usize = 20;

/// Parses a raw response body into a rectangular table of string columns.
pub fn parse_series_csv(body: &str) -> Result<DataFrame, SeriesDataError> {
    let rows: Vec<Vec<&str>> = body
        .lines()
        .map(|line| {
            let mut cells: Vec<&str> = line.split(',').map(str::trim).collect();
            cells.truncate(MAX_COLUMNS);
            cells.resize(MAX_COLUMNS, "");
            cells
        })
        .collect();

    let kept: Vec<usize> = (0..MAX_COLUMNS)
        .filter(|&col| rows.iter().any(|row| !row[col].is_empty()))
        .collect();

    let complete: Vec<&Vec<&str>> = rows
        .iter()
        .filter(|row| kept.iter().all(|&col| !row[col].is_empty()))
        .collect();

    let Some((header, data)) = complete.split_first() else {
        return Err(SeriesDataError::EmptyTable);
    };
    if data.is_empty() {
        return Err(SeriesDataError::EmptyTable);
    }

    let columns: Vec<Column> = kept
        .iter()
        .map(|&col| {
            let values: Vec<&str> = data.iter().map(|row| row[col]).collect();
            Column::new(header[col].into(), values)
        })
        .collect();

    DataFrame::new(columns).map_err(SeriesDataError::from)
}

/// Extracts one column as `f64` values, failing on any non-numeric cell.
pub fn numeric_column(df: &DataFrame, column: &str) -> Result<Vec<f64>, SeriesDataError> {
    let values = df
        .column(column)
        .map_err(|_| SeriesDataError::MissingColumn {
            column: column.to_string(),
        })?
        .as_materialized_series()
        .str()
        .map_err(|_| SeriesDataError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut parsed = Vec::with_capacity(values.len());
    for value in values.into_iter() {
        let value = value.unwrap_or("");
        let number: f64 = value.parse().map_err(|_| SeriesDataError::NumericParse {
            column: column.to_string(),
            value: value.to_string(),
        })?;
        parsed.push(number);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\
Latitude (decimal degrees):\t48.7758
Longitude (decimal degrees):\t9.1829
Elevation (m):\t249.0

time,P,G(i),Gb(i),Gd(i),Gr(i),H_sun,T2m,WS10m,Int
20160101:0010,0.0,0.0,0.0,0.0,0.0,0.0,3.51,2.14,0.0
20160101:0110,0.0,0.0,0.0,0.0,0.0,0.0,3.28,2.07,0.0
20160101:0210,120.5,95.2,40.1,55.1,0.0,12.3,3.05,2.0,0.0

P: PV system power (W)
T2m: 2-m air temperature (degree Celsius)
";

    #[test]
    fn metadata_and_footer_lines_are_dropped() {
        let df = parse_series_csv(BODY).unwrap();
        assert_eq!(df.height(), 3);
        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            ["time", "P", "G(i)", "Gb(i)", "Gd(i)", "Gr(i)", "H_sun", "T2m", "WS10m", "Int"]
        );
    }

    #[test]
    fn numeric_extraction_reads_expected_values() {
        let df = parse_series_csv(BODY).unwrap();
        let power = numeric_column(&df, "P").unwrap();
        assert_eq!(power, [0.0, 0.0, 120.5]);
        let temperature = numeric_column(&df, "T2m").unwrap();
        assert_eq!(temperature, [3.51, 3.28, 3.05]);
    }

    #[test]
    fn rows_with_missing_cells_are_dropped() {
        let body = "\
a,b,c
1,2,3
4,,6
7,8,9
";
        let df = parse_series_csv(body).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(numeric_column(&df, "a").unwrap(), [1.0, 7.0]);
    }

    #[test]
    fn all_empty_columns_do_not_survive() {
        // Trailing separators produce phantom columns that must not count
        // towards row completeness.
        let body = "\
a,b,
1,2,
3,4,
";
        let df = parse_series_csv(body).unwrap();
        assert_eq!(df.width(), 2);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn empty_body_is_an_error() {
        assert!(matches!(
            parse_series_csv(""),
            Err(SeriesDataError::EmptyTable)
        ));
        assert!(matches!(
            parse_series_csv("only,a,header\n"),
            Err(SeriesDataError::EmptyTable)
        ));
    }

    #[test]
    fn non_numeric_cell_fails_loudly() {
        let df = parse_series_csv(BODY).unwrap();
        let result = numeric_column(&df, "time");
        assert!(matches!(
            result,
            Err(SeriesDataError::NumericParse { .. })
        ));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let df = parse_series_csv(BODY).unwrap();
        match numeric_column(&df, "A(i)") {
            Err(SeriesDataError::MissingColumn { column }) => assert_eq!(column, "A(i)"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
