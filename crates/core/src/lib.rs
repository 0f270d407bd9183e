//! Stride core data models.
//!
//! This crate defines the ladder configuration, the requirement rule seam and
//! the plain value types (positions, level descriptors, phases, percentages)
//! exchanged with the progression engine.

#![warn(missing_docs)]

mod error;
mod requirement;
mod config;
mod ladder;

mod level;
mod position;
mod phase;
mod percent;

pub use error::{ConfigError, Result};
pub use requirement::{Requirement, RequirementRule};
pub use config::LadderConfig;
pub use ladder::Ladder;

pub use level::{LevelDescriptor, LevelStatus};
pub use position::Position;
pub use phase::{PhaseDef, PhaseStats, PhaseStatus};
pub use percent::Percent;
