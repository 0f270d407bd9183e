//! Position on the ladder.

use serde::{Deserialize, Serialize};

/// Where a date lands on the ladder.
///
/// Positions are plain values produced fresh by every query. They order
/// lexicographically: first by level, then by count within the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Current level
    pub level: u32,

    /// Units completed within the current level
    pub count: u32,
}

impl Position {
    /// Create a position.
    pub fn new(level: u32, count: u32) -> Self {
        Self { level, count }
    }

    /// Whether the count has reached the given requirement.
    ///
    /// A complete level is still reported at that level until a further unit
    /// rolls it over.
    pub fn is_level_complete(&self, requirement: u32) -> bool {
        self.count >= requirement
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {} ({} done)", self.level, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        assert!(Position::new(7, 7) < Position::new(8, 1));
        assert!(Position::new(8, 0) < Position::new(8, 1));
        assert!(Position::new(6, 6) < Position::new(7, 0));
    }

    #[test]
    fn test_level_complete() {
        assert!(Position::new(7, 7).is_level_complete(7));
        assert!(!Position::new(7, 6).is_level_complete(7));
    }
}
