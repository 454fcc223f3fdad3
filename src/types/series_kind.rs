use crate::types::direction::Direction;
use crate::types::schema;
use std::fmt;

/// Identifies one of the six series making up a region-year record.
///
/// Used in failure reporting so callers can tell which upstream series was
/// unavailable or degenerate without parsing log text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    PvGeneration,
    Temperature,
    Radiation(Direction),
}

impl SeriesKind {
    /// The output-table column this series lands in.
    pub fn column(&self) -> &'static str {
        match self {
            SeriesKind::PvGeneration => schema::PV_GENERATION,
            SeriesKind::Temperature => schema::TEMPERATURE,
            SeriesKind::Radiation(direction) => schema::radiation_column(*direction),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
