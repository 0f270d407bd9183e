//! Progress snapshots for a query date.

use chrono::NaiveDate;
use serde::Serialize;
use stride_core::{Percent, PhaseStats, Position, RequirementRule};

use crate::engine::ProgressionEngine;

/// Progress tracking service.
///
/// This is the whole surface a presentation layer needs: hand it a date and
/// render what comes back.
pub trait ProgressTracker {
    /// Position reached on `date`.
    fn position(&self, date: NaiveDate) -> Position;

    /// Take a full progress snapshot for `date`.
    fn snapshot(&self, date: NaiveDate) -> ProgressSnapshot;
}

/// Everything known about progress on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    /// Query date
    pub date: NaiveDate,

    /// Position on the ladder
    pub position: Position,

    /// Units needed at the current level
    pub requirement: u32,

    /// Share of the current level done
    pub level_percent: Percent,

    /// Units left before the current level is complete
    pub units_left_in_level: u32,

    /// Cumulative units covered so far
    pub cumulative_units_completed: u64,

    /// Cumulative units of the whole ladder
    pub cumulative_units_goal: u64,

    /// Cumulative units still to cover
    pub cumulative_units_remaining: u64,

    /// Units done so far
    pub units_completed: u64,

    /// Units in the whole ladder
    pub units_required: u64,

    /// Units still to do
    pub units_remaining: u64,

    /// Share of the cumulative goal done
    pub overall_percent: Percent,

    /// Levels finished or started
    pub levels_touched: u32,

    /// Date the ladder will be finished at the current cadence
    pub projected_finish: NaiveDate,

    /// Progress through each configured phase
    pub phases: Vec<PhaseStats>,
}

impl ProgressSnapshot {
    /// Whether the last level has been finished.
    pub fn is_finished(&self) -> bool {
        self.units_remaining == 0
    }

    /// Whether the current level is full but not yet rolled over.
    pub fn is_level_complete(&self) -> bool {
        self.position.is_level_complete(self.requirement)
    }
}

impl<R: RequirementRule> ProgressTracker for ProgressionEngine<R> {
    fn position(&self, date: NaiveDate) -> Position {
        self.position_for_date(date)
    }

    fn snapshot(&self, date: NaiveDate) -> ProgressSnapshot {
        let position = self.position_for_date(date);

        ProgressSnapshot {
            date,
            position,
            requirement: self.ladder().requirement_of(position.level),
            level_percent: self.level_progress_percent(&position),
            units_left_in_level: self.units_left_in_level(&position),
            cumulative_units_completed: self.cumulative_units_completed(&position),
            cumulative_units_goal: self.total_units_goal(),
            cumulative_units_remaining: self.cumulative_units_remaining(&position),
            units_completed: self.units_completed_count(&position),
            units_required: self.total_units_required(),
            units_remaining: self.total_units_remaining(&position),
            overall_percent: self.overall_progress_percent(&position),
            levels_touched: self.levels_touched(&position),
            projected_finish: self.projected_completion_date(&position, date),
            phases: self.configured_phase_stats(&position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::LadderConfig;

    fn engine() -> ProgressionEngine {
        ProgressionEngine::from_config(LadderConfig::default()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_snapshot_on_reference_date() {
        let snapshot = engine().snapshot(date(2025, 12, 1));

        assert_eq!(snapshot.position, Position::new(14, 7));
        assert_eq!(snapshot.requirement, 14);
        assert_eq!(snapshot.level_percent.to_string(), "50.0");
        assert_eq!(snapshot.units_left_in_level, 7);
        // Levels 2..=13 hold 90 units
        assert_eq!(snapshot.units_completed, 97);
        assert_eq!(snapshot.units_required, 230);
        assert_eq!(snapshot.units_remaining, 133);
        assert_eq!(
            snapshot.cumulative_units_completed + snapshot.cumulative_units_remaining,
            snapshot.cumulative_units_goal
        );
        assert_eq!(snapshot.levels_touched, 13);
        assert_eq!(snapshot.projected_finish, date(2026, 8, 24));
        assert_eq!(snapshot.phases.len(), 5);
        assert!(!snapshot.is_finished());
        assert!(!snapshot.is_level_complete());
    }

    #[test]
    fn test_snapshot_is_repeatable() {
        let engine = engine();
        let day = date(2026, 3, 14);
        assert_eq!(engine.snapshot(day), engine.snapshot(day));
    }

    #[test]
    fn test_finished_snapshot() {
        let day = date(2030, 1, 1);
        let snapshot = engine().snapshot(day);
        assert!(snapshot.is_finished());
        assert!(snapshot.is_level_complete());
        assert_eq!(snapshot.projected_finish, day);
        assert_eq!(snapshot.overall_percent.to_string(), "100.0");
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = engine().snapshot(date(2025, 12, 1));
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["date"], "2025-12-01");
        assert_eq!(json["position"]["level"], 14);
        assert_eq!(json["phases"][0]["status"], "completed");
    }
}
