//! Aggregate statistics over the ladder.
//!
//! Every figure here is a pure function of the ladder and a position. Two
//! kinds of totals are tracked: unit counts (runs) and cumulative units, which
//! weight each unit by its level (kilometres).

use stride_core::{Percent, Position, RequirementRule};

use crate::engine::ProgressionEngine;

impl<R: RequirementRule> ProgressionEngine<R> {
    /// Sum of `level * requirement` over the whole ladder.
    pub fn total_units_goal(&self) -> u64 {
        self.ladder_levels()
            .map(|level| u64::from(level) * u64::from(self.ladder().requirement_of(level)))
            .sum()
    }

    /// Sum of requirements over the whole ladder.
    pub fn total_units_required(&self) -> u64 {
        self.ladder_levels()
            .map(|level| u64::from(self.ladder().requirement_of(level)))
            .sum()
    }

    /// Cumulative units of every level below the position, plus
    /// `level * count` for the current one.
    pub fn cumulative_units_completed(&self, position: &Position) -> u64 {
        let below: u64 = self
            .levels_below(position)
            .map(|level| u64::from(level) * u64::from(self.ladder().requirement_of(level)))
            .sum();
        below + u64::from(position.level) * u64::from(position.count)
    }

    /// Requirements of every level below the position, plus its count.
    pub fn units_completed_count(&self, position: &Position) -> u64 {
        let below: u64 = self
            .levels_below(position)
            .map(|level| u64::from(self.ladder().requirement_of(level)))
            .sum();
        below + u64::from(position.count)
    }

    /// Units still to do before the ladder is finished.
    pub fn total_units_remaining(&self, position: &Position) -> u64 {
        self.total_units_required()
            .saturating_sub(self.units_completed_count(position))
    }

    /// Cumulative units still to cover before the ladder is finished.
    pub fn cumulative_units_remaining(&self, position: &Position) -> u64 {
        self.total_units_goal()
            .saturating_sub(self.cumulative_units_completed(position))
    }

    /// Share of the cumulative goal completed, to one decimal.
    ///
    /// 0.0 when the goal is zero.
    pub fn overall_progress_percent(&self, position: &Position) -> Percent {
        Percent::ratio(
            self.cumulative_units_completed(position),
            self.total_units_goal(),
        )
    }

    /// Share of the current level completed.
    pub fn level_progress_percent(&self, position: &Position) -> Percent {
        Percent::ratio(
            u64::from(position.count),
            u64::from(self.ladder().requirement_of(position.level)),
        )
    }

    /// Units left before the current level is complete.
    pub fn units_left_in_level(&self, position: &Position) -> u32 {
        self.ladder()
            .requirement_of(position.level)
            .saturating_sub(position.count)
    }

    /// Levels finished or started: each level below the position, plus the
    /// current one once it has at least one unit.
    pub fn levels_touched(&self, position: &Position) -> u32 {
        let below = position.level.saturating_sub(self.ladder().start_level());
        below + u32::from(position.count > 0)
    }

    fn ladder_levels(&self) -> std::ops::RangeInclusive<u32> {
        self.ladder().start_level()..=self.ladder().end_level()
    }

    fn levels_below(&self, position: &Position) -> std::ops::Range<u32> {
        let start = self.ladder().start_level();
        start..position.level.max(start)
    }
}
