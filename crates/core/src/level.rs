//! Level descriptors.

use serde::{Deserialize, Serialize};
use crate::position::Position;

/// One rung of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    /// Level value
    pub level: u32,

    /// Units needed to clear this level
    pub requirement: u32,

    /// `level * requirement`, e.g. kilometres covered by all runs at this level
    pub cumulative_units: u64,
}

impl LevelDescriptor {
    /// Describe a level from its requirement.
    pub fn new(level: u32, requirement: u32) -> Self {
        Self {
            level,
            requirement,
            cumulative_units: u64::from(level) * u64::from(requirement),
        }
    }

    /// Status of this level relative to a position.
    pub fn status_for(&self, position: &Position) -> LevelStatus {
        match self.level.cmp(&position.level) {
            std::cmp::Ordering::Less => LevelStatus::Completed,
            std::cmp::Ordering::Equal => LevelStatus::Current,
            std::cmp::Ordering::Greater => LevelStatus::Upcoming,
        }
    }
}

/// Level status relative to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    Completed,
    Current,
    Upcoming,
}

impl LevelStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelStatus::Completed => "completed",
            LevelStatus::Current => "current",
            LevelStatus::Upcoming => "upcoming",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_units_is_product() {
        let level = LevelDescriptor::new(14, 3);
        assert_eq!(level.cumulative_units, 42);
    }

    #[test]
    fn test_status_for_position() {
        let position = Position::new(10, 4);
        assert_eq!(LevelDescriptor::new(9, 9).status_for(&position), LevelStatus::Completed);
        assert_eq!(LevelDescriptor::new(10, 10).status_for(&position), LevelStatus::Current);
        assert_eq!(LevelDescriptor::new(11, 11).status_for(&position), LevelStatus::Upcoming);
    }
}
