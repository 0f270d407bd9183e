//! Inverse projection: position → completion date.

use chrono::{Days, NaiveDate};
use stride_core::{Position, RequirementRule};
use tracing::debug;

use crate::engine::ProgressionEngine;

impl<R: RequirementRule> ProgressionEngine<R> {
    /// Units left between `position` and the top of the ladder.
    pub fn remaining_units(&self, position: &Position) -> u64 {
        let ladder = self.ladder();
        let current = ladder
            .requirement_of(position.level)
            .saturating_sub(position.count);
        let later: u64 = (position.level.saturating_add(1)..=ladder.end_level())
            .map(|level| u64::from(ladder.requirement_of(level)))
            .sum();
        u64::from(current) + later
    }

    /// Date on which the last level will be finished, continuing at the
    /// configured cadence from `from`.
    ///
    /// Equals `from` once the ladder is complete.
    pub fn projected_completion_date(&self, position: &Position, from: NaiveDate) -> NaiveDate {
        let units = self.remaining_units(position);
        let days = units.saturating_mul(self.cadence_days_unsigned());
        let finish = add_days(from, days);
        debug!("{} units left from {}, finishing {}", units, from, finish);
        finish
    }

    /// Date `units` cadence intervals after `from`. Negative `units` step back.
    pub fn next_unit_date(&self, from: NaiveDate, units: i64) -> NaiveDate {
        let days = units.unsigned_abs().saturating_mul(self.cadence_days_unsigned());
        if units >= 0 {
            add_days(from, days)
        } else {
            from.checked_sub_days(Days::new(days))
                .unwrap_or(NaiveDate::MIN)
        }
    }

    fn cadence_days_unsigned(&self) -> u64 {
        self.ladder().cadence_days().unsigned_abs()
    }
}

/// `from + days`, clamped to the last representable date.
fn add_days(from: NaiveDate, days: u64) -> NaiveDate {
    from.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}
