//! Validated ladder.

use chrono::NaiveDate;
use tracing::info;

use crate::config::LadderConfig;
use crate::error::Result;
use crate::level::{LevelDescriptor, LevelStatus};
use crate::phase::PhaseDef;
use crate::position::Position;
use crate::requirement::{Requirement, RequirementRule};

/// A ladder whose configuration has passed validation.
///
/// Holding a `Ladder` is proof that every invariant of its [`LadderConfig`]
/// holds, so queries built on top of it never fail.
#[derive(Debug, Clone)]
pub struct Ladder<R = Requirement> {
    config: LadderConfig,
    rule: R,
}

impl Ladder<Requirement> {
    /// Validate a configuration using its own requirement rule.
    pub fn new(config: LadderConfig) -> Result<Self> {
        let rule = config.requirement.clone();
        Self::with_rule(config, rule)
    }
}

impl<R: RequirementRule> Ladder<R> {
    /// Validate a configuration against a custom requirement rule.
    ///
    /// The `requirement` field of the config is ignored in favour of `rule`.
    pub fn with_rule(config: LadderConfig, rule: R) -> Result<Self> {
        config.validate_with(&rule)?;
        info!(
            "Ladder {}..={} anchored at level {} ({} done) on {}, one unit every {} days",
            config.start_level,
            config.end_level,
            config.reference_level,
            config.reference_count,
            config.reference_date,
            config.cadence_days,
        );
        Ok(Self { config, rule })
    }

    /// The underlying configuration.
    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Units needed to clear `level`.
    pub fn requirement_of(&self, level: u32) -> u32 {
        self.rule.units_for(level)
    }

    /// First level of the ladder.
    pub fn start_level(&self) -> u32 {
        self.config.start_level
    }

    /// Last level of the ladder.
    pub fn end_level(&self) -> u32 {
        self.config.end_level
    }

    /// Anchor date.
    pub fn reference_date(&self) -> NaiveDate {
        self.config.reference_date
    }

    /// Level reached on the anchor date.
    pub fn reference_level(&self) -> u32 {
        self.config.reference_level
    }

    /// Units done at the reference level on the anchor date.
    pub fn reference_count(&self) -> u32 {
        self.config.reference_count
    }

    /// Days per unit. Always positive.
    pub fn cadence_days(&self) -> i64 {
        self.config.cadence_days
    }

    /// Configured phases.
    pub fn phases(&self) -> &[PhaseDef] {
        &self.config.phases
    }

    /// Number of levels on the ladder.
    pub fn len(&self) -> usize {
        (self.config.end_level - self.config.start_level) as usize + 1
    }

    /// A validated ladder always has at least one level.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first position on the ladder.
    pub fn bottom(&self) -> Position {
        Position::new(self.start_level(), 0)
    }

    /// The terminal position: last level, fully complete.
    pub fn top(&self) -> Position {
        let end = self.end_level();
        Position::new(end, self.requirement_of(end))
    }

    /// Descriptors for every level from start to end, computed fresh.
    pub fn all_levels(&self) -> Vec<LevelDescriptor> {
        (self.start_level()..=self.end_level())
            .map(|level| LevelDescriptor::new(level, self.requirement_of(level)))
            .collect()
    }

    /// Every level paired with its status relative to `position`.
    pub fn level_statuses(&self, position: &Position) -> Vec<(LevelDescriptor, LevelStatus)> {
        self.all_levels()
            .into_iter()
            .map(|level| {
                let status = level.status_for(position);
                (level, status)
            })
            .collect()
    }
}
