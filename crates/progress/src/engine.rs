//! Forward mapping: calendar date → ladder position.

use chrono::{DateTime, NaiveDate, TimeZone};
use stride_core::{Ladder, LadderConfig, Position, Requirement, RequirementRule};
use tracing::{debug, trace};

/// The progression engine.
///
/// Wraps a validated [`Ladder`] and answers every query as a pure function of
/// its inputs. There is no cached "current" position; callers ask again for
/// each date they care about.
#[derive(Debug, Clone)]
pub struct ProgressionEngine<R = Requirement> {
    ladder: Ladder<R>,
}

impl ProgressionEngine<Requirement> {
    /// Validate `config` and build an engine over it.
    pub fn from_config(config: LadderConfig) -> stride_core::Result<Self> {
        Ok(Self::new(Ladder::new(config)?))
    }
}

impl<R: RequirementRule> ProgressionEngine<R> {
    /// Create an engine over an already validated ladder.
    pub fn new(ladder: Ladder<R>) -> Self {
        Self { ladder }
    }

    /// The ladder this engine walks.
    pub fn ladder(&self) -> &Ladder<R> {
        &self.ladder
    }

    /// Whole cadence intervals between the reference date and `date`.
    ///
    /// Floors toward negative infinity, so a date half an interval before the
    /// reference counts as one unit behind.
    pub fn units_since_reference(&self, date: NaiveDate) -> i64 {
        let days = date
            .signed_duration_since(self.ladder.reference_date())
            .num_days();
        days.div_euclid(self.ladder.cadence_days())
    }

    /// Position reached on `date`.
    pub fn position_for_date(&self, date: NaiveDate) -> Position {
        let additional = self.units_since_reference(date);
        let position = self.settle(additional);
        trace!("{} -> {} ({:+} units)", date, position, additional);
        position
    }

    /// Position reached at an instant. The time of day is dropped.
    pub fn position_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Position {
        self.position_for_date(at.date_naive())
    }

    /// Apply `additional` units to the reference position and roll over
    /// levels in either direction until the count fits its level.
    fn settle(&self, additional: i64) -> Position {
        let ladder = &self.ladder;
        let (start, end) = (ladder.start_level(), ladder.end_level());

        let mut level = ladder.reference_level();
        let mut remaining = i64::from(ladder.reference_count()).saturating_add(additional);

        // A count equal to the requirement stays put: the level is complete
        // but not yet advanced.
        while remaining > i64::from(ladder.requirement_of(level)) {
            if level == end {
                debug!("Saturated at top of ladder ({} units past reference)", additional);
                return ladder.top();
            }
            remaining -= i64::from(ladder.requirement_of(level));
            level += 1;
        }

        while remaining < 0 {
            if level == start {
                debug!(
                    "Saturated at bottom of ladder ({} units before reference)",
                    additional.unsigned_abs()
                );
                return ladder.bottom();
            }
            level -= 1;
            remaining += i64::from(ladder.requirement_of(level));
        }

        Position::new(level, remaining as u32)
    }
}
