//! The NUTS region hierarchy, read from the `NUTS2021` spreadsheet.
//!
//! The workbook encodes the hierarchy as flat columns (`nuts0`, `nuts1`,
//! `nuts3`) rather than a tree; it is loaded wholesale and queried by
//! equality, mirroring how the driver walks country → area → subregion.

use crate::regions::error::HierarchyError;
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use log::info;
use std::path::{Path, PathBuf};

const NUTS0_COLUMN: &str = "nuts0";
const NUTS1_COLUMN: &str = "nuts1";
const NUTS3_COLUMN: &str = "nuts3";

/// One row of the hierarchy table: a NUTS-3 subregion with its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutsRow {
    pub nuts0: String,
    pub nuts1: String,
    pub nuts3: String,
}

/// In-memory copy of the NUTS hierarchy lookup table.
#[derive(Debug, Clone)]
pub struct NutsHierarchy {
    rows: Vec<NutsRow>,
}

impl NutsHierarchy {
    /// Reads the first worksheet of a `NUTS2021`-style workbook.
    ///
    /// The header row must contain `nuts0`, `nuts1` and `nuts3` columns;
    /// rows with an empty cell in any of the three are skipped.
    pub fn from_xlsx(path: impl AsRef<Path>) -> Result<Self, HierarchyError> {
        let path = path.as_ref();
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| HierarchyError::Workbook(path.to_path_buf(), e))?;
        let worksheets = workbook.worksheets();
        let (_, sheet) = worksheets
            .first()
            .ok_or_else(|| HierarchyError::EmptyWorkbook(path.to_path_buf()))?;

        let nuts0_col = find_column(sheet, path, NUTS0_COLUMN)?;
        let nuts1_col = find_column(sheet, path, NUTS1_COLUMN)?;
        let nuts3_col = find_column(sheet, path, NUTS3_COLUMN)?;

        let mut rows = Vec::new();
        for row in 1..sheet.height() {
            let nuts0 = cell_string(sheet, row, nuts0_col);
            let nuts1 = cell_string(sheet, row, nuts1_col);
            let nuts3 = cell_string(sheet, row, nuts3_col);
            if let (Some(nuts0), Some(nuts1), Some(nuts3)) = (nuts0, nuts1, nuts3) {
                rows.push(NutsRow {
                    nuts0,
                    nuts1,
                    nuts3,
                });
            }
        }
        info!("Loaded {} NUTS hierarchy rows from {:?}", rows.len(), path);
        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<NutsRow>) -> Self {
        Self { rows }
    }

    /// The NUTS-1 areas of a country, unique, in table order.
    pub fn level1_areas(&self, country: &str) -> Vec<&str> {
        let mut areas: Vec<&str> = Vec::new();
        for row in self.rows.iter().filter(|row| row.nuts0 == country) {
            if !areas.contains(&row.nuts1.as_str()) {
                areas.push(&row.nuts1);
            }
        }
        areas
    }

    /// All NUTS-3 subregions within a NUTS-1 area, in table order.
    pub fn level3_subregions(&self, area: &str) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.nuts1 == area)
            .map(|row| row.nuts3.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn find_column(
    sheet: &calamine::Range<Data>,
    path: &Path,
    column: &str,
) -> Result<usize, HierarchyError> {
    (0..sheet.width())
        .find(|&col| {
            sheet
                .get((0, col))
                .and_then(|cell| cell.get_string())
                .is_some_and(|header| header == column)
        })
        .ok_or_else(|| HierarchyError::MissingColumn {
            file: PathBuf::from(path),
            column: column.to_string(),
        })
}

fn cell_string(sheet: &calamine::Range<Data>, row: usize, col: usize) -> Option<String> {
    let value = sheet.get((row, col))?.get_string()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NutsHierarchy {
        let row = |nuts0: &str, nuts1: &str, nuts3: &str| NutsRow {
            nuts0: nuts0.to_string(),
            nuts1: nuts1.to_string(),
            nuts3: nuts3.to_string(),
        };
        NutsHierarchy::from_rows(vec![
            row("DE", "DE1", "DE111"),
            row("DE", "DE1", "DE112"),
            row("DE", "DE2", "DE211"),
            row("DE", "DE1", "DE113"),
            row("AT", "AT1", "AT111"),
        ])
    }

    #[test]
    fn level1_areas_are_unique_and_ordered() {
        let hierarchy = sample();
        assert_eq!(hierarchy.level1_areas("DE"), ["DE1", "DE2"]);
        assert_eq!(hierarchy.level1_areas("AT"), ["AT1"]);
        assert!(hierarchy.level1_areas("FR").is_empty());
    }

    #[test]
    fn level3_subregions_keep_table_order() {
        let hierarchy = sample();
        assert_eq!(
            hierarchy.level3_subregions("DE1"),
            ["DE111", "DE112", "DE113"]
        );
        assert_eq!(hierarchy.level3_subregions("DE2"), ["DE211"]);
    }
}
