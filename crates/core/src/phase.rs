//! Phase model - named sub-ranges of the ladder.

use serde::{Deserialize, Serialize};
use crate::percent::Percent;

/// A named, inclusive range of levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDef {
    /// Phase name
    pub name: String,

    /// First level of the phase
    pub lo: u32,

    /// Last level of the phase
    pub hi: u32,
}

impl PhaseDef {
    /// Create a phase definition.
    pub fn new(name: impl Into<String>, lo: u32, hi: u32) -> Self {
        Self {
            name: name.into(),
            lo,
            hi,
        }
    }

    /// Whether a level falls inside this phase.
    pub fn contains(&self, level: u32) -> bool {
        (self.lo..=self.hi).contains(&level)
    }

    /// Status of this phase for a current level.
    pub fn status_at(&self, level: u32) -> PhaseStatus {
        if level > self.hi {
            PhaseStatus::Completed
        } else if self.contains(level) {
            PhaseStatus::InProgress
        } else {
            PhaseStatus::NotStarted
        }
    }

    /// The five phases of the 2km → 21km running ladder.
    pub fn defaults() -> Vec<PhaseDef> {
        vec![
            PhaseDef::new("Starting Out", 2, 5),
            PhaseDef::new("Building Base", 6, 10),
            PhaseDef::new("Mid Journey", 11, 15),
            PhaseDef::new("Advanced", 16, 19),
            PhaseDef::new("Final Push", 20, 21),
        ]
    }
}

/// Phase status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Progress through one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseStats {
    /// Phase name
    pub name: String,

    /// First level
    pub lo: u32,

    /// Last level
    pub hi: u32,

    /// Units completed inside the phase
    pub completed: u64,

    /// Units required by the phase
    pub total: u64,

    /// `completed / total`
    pub percent: Percent,

    /// Where the position sits relative to the phase
    pub status: PhaseStatus,
}

impl PhaseStats {
    /// Share of the phase done, rounded to a whole percent.
    pub fn whole_percent(&self) -> u32 {
        Percent::ratio_whole(self.completed, self.total)
    }
}
