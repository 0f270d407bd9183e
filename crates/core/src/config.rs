//! Ladder configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::phase::PhaseDef;
use crate::requirement::{Requirement, RequirementRule};

/// Reference point, cadence and bounds of a progression ladder.
///
/// Built once at startup and never mutated. Fields omitted from a JSON file
/// fall back to [`LadderConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Date on which the reference position was observed
    pub reference_date: NaiveDate,

    /// Level reached on the reference date
    pub reference_level: u32,

    /// Units already done at the reference level on the reference date
    pub reference_count: u32,

    /// Days represented by one unit
    pub cadence_days: i64,

    /// First level of the ladder
    pub start_level: u32,

    /// Last level of the ladder
    pub end_level: u32,

    /// Units needed per level
    pub requirement: Requirement,

    /// Named sub-ranges used for phase statistics
    pub phases: Vec<PhaseDef>,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            reference_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap_or_default(),
            reference_level: 14,
            reference_count: 7,
            cadence_days: 2,
            start_level: 2,
            end_level: 21,
            requirement: Requirement::Identity,
            phases: PhaseDef::defaults(),
        }
    }
}

impl LadderConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Validate against the configured requirement rule.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&self.requirement)
    }

    /// Validate against an arbitrary requirement rule.
    ///
    /// Returns the first violated invariant.
    pub fn validate_with<R: RequirementRule>(&self, rule: &R) -> Result<()> {
        let (start, end) = (self.start_level, self.end_level);
        if start > end {
            return Err(ConfigError::EmptyLadder { start, end });
        }
        if self.cadence_days <= 0 {
            return Err(ConfigError::NonPositiveCadence(self.cadence_days));
        }
        if !(start..=end).contains(&self.reference_level) {
            return Err(ConfigError::ReferenceLevelOutOfRange {
                level: self.reference_level,
                start,
                end,
            });
        }

        let mut goal: u64 = 0;
        for level in start..=end {
            let units = rule.units_for(level);
            if units == 0 {
                return Err(ConfigError::NonPositiveRequirement { level });
            }
            goal = goal
                .checked_add(u64::from(level) * u64::from(units))
                .ok_or(ConfigError::GoalOverflow)?;
        }

        let requirement = rule.units_for(self.reference_level);
        if self.reference_count > requirement {
            return Err(ConfigError::ReferenceCountOutOfRange {
                level: self.reference_level,
                count: self.reference_count,
                requirement,
            });
        }

        for phase in &self.phases {
            let reason = if phase.name.trim().is_empty() {
                Some("name is empty".to_string())
            } else if phase.lo > phase.hi {
                Some(format!("range {}..={} is reversed", phase.lo, phase.hi))
            } else if phase.lo < start || phase.hi > end {
                Some(format!(
                    "range {}..={} leaves the ladder {}..={}",
                    phase.lo, phase.hi, start, end
                ))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ConfigError::InvalidPhase {
                    name: phase.name.clone(),
                    reason,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = LadderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference_date.to_string(), "2025-12-01");
    }

    #[test]
    fn test_rejects_empty_ladder() {
        let config = LadderConfig {
            start_level: 10,
            end_level: 5,
            reference_level: 7,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyLadder { start: 10, end: 5 })
        ));
    }

    #[test]
    fn test_rejects_non_positive_cadence() {
        for cadence in [0, -3] {
            let config = LadderConfig {
                cadence_days: cadence,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NonPositiveCadence(c)) if c == cadence
            ));
        }
    }

    #[test]
    fn test_rejects_reference_outside_ladder() {
        let config = LadderConfig {
            reference_level: 22,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ReferenceLevelOutOfRange { level: 22, .. })
        ));
    }

    #[test]
    fn test_reference_count_may_equal_requirement() {
        let config = LadderConfig {
            reference_count: 14,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = LadderConfig {
            reference_count: 15,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ReferenceCountOutOfRange { requirement: 14, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_requirement() {
        let config = LadderConfig {
            start_level: 0,
            ..Default::default()
        };
        // Identity rule gives level 0 a requirement of 0
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveRequirement { level: 0 })
        ));
    }

    #[test]
    fn test_rejects_phase_outside_ladder() {
        let config = LadderConfig {
            phases: vec![PhaseDef::new("Ultra", 20, 42)],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPhase { ref name, .. }) if name == "Ultra"
        ));
    }

    #[test]
    fn test_validate_with_custom_rule() {
        let config = LadderConfig::default();
        let rule = |level: u32| if level == 9 { 0 } else { 3 };
        assert!(matches!(
            config.validate_with(&rule),
            Err(ConfigError::NonPositiveRequirement { level: 9 })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LadderConfig::from_json_str(
            r#"{"reference_date":"2026-01-15","cadence_days":3,"requirement":{"rule":"constant","units":4}}"#,
        )
        .unwrap();
        assert_eq!(config.cadence_days, 3);
        assert_eq!(config.requirement, Requirement::Constant { units: 4 });
        assert_eq!(config.start_level, 2);
        assert_eq!(config.phases.len(), 5);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"reference_level":7,"reference_count":7}}"#).unwrap();

        let config = LadderConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.reference_level, 7);
        assert_eq!(config.reference_count, 7);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LadderConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        assert!(matches!(
            LadderConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
