use std::fmt;

/// A compass direction for which plane-of-array irradiance is requested.
///
/// PVGIS expresses plane orientation as an "aspect" angle relative to true
/// south: 0 is south, negative values turn east, positive values west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    East,
    West,
    North,
}

impl Direction {
    /// All directions, in the order their series appear in the output table.
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::North,
    ];

    /// The PVGIS aspect angle for a vertical plane facing this direction.
    pub fn aspect(&self) -> i32 {
        match self {
            Direction::South => 0,
            Direction::East => -90,
            Direction::West => 90,
            Direction::North => -180,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_angles_match_pvgis_convention() {
        assert_eq!(Direction::South.aspect(), 0);
        assert_eq!(Direction::East.aspect(), -90);
        assert_eq!(Direction::West.aspect(), 90);
        assert_eq!(Direction::North.aspect(), -180);
    }

    #[test]
    fn all_starts_south_ends_north() {
        let labels: Vec<&str> = Direction::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["south", "east", "west", "north"]);
    }
}
