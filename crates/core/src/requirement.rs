//! Per-level unit requirement rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of units needed to clear a level.
///
/// This is the seam for plugging a different leveling curve into a
/// [`Ladder`](crate::Ladder). Implementations must be pure: the same level
/// always maps to the same requirement.
pub trait RequirementRule {
    /// Units required to clear `level`. Zero means "undefined" and is rejected
    /// when the ladder is built.
    fn units_for(&self, level: u32) -> u32;
}

impl<F> RequirementRule for F
where
    F: Fn(u32) -> u32,
{
    fn units_for(&self, level: u32) -> u32 {
        self(level)
    }
}

/// Built-in, serializable requirement rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Requirement {
    /// A level needs as many units as its own value (level 14 → 14 runs)
    #[default]
    Identity,

    /// Every level needs the same number of units
    Constant { units: u32 },

    /// `base + per_level * level`
    Linear { base: u32, per_level: u32 },

    /// Explicit lookup; levels missing from the table need 0 units
    Table { units: BTreeMap<u32, u32> },
}

impl RequirementRule for Requirement {
    fn units_for(&self, level: u32) -> u32 {
        match self {
            Requirement::Identity => level,
            Requirement::Constant { units } => *units,
            Requirement::Linear { base, per_level } => {
                base.saturating_add(per_level.saturating_mul(level))
            }
            Requirement::Table { units } => units.get(&level).copied().unwrap_or(0),
        }
    }
}
