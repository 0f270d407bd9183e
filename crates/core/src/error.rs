//! Configuration errors.

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or validating a ladder configuration.
///
/// These only ever surface when a [`Ladder`](crate::Ladder) is built. Once a
/// ladder exists every query against it is infallible.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Start level is above end level
    #[error("empty ladder: start level {start} is above end level {end}")]
    EmptyLadder {
        /// Configured start level
        start: u32,
        /// Configured end level
        end: u32,
    },

    /// Cadence must be at least one day
    #[error("cadence must be a positive number of days, got {0}")]
    NonPositiveCadence(i64),

    /// Reference level lies outside the ladder
    #[error("reference level {level} is outside the ladder {start}..={end}")]
    ReferenceLevelOutOfRange {
        /// Configured reference level
        level: u32,
        /// First level of the ladder
        start: u32,
        /// Last level of the ladder
        end: u32,
    },

    /// Reference count exceeds the requirement of the reference level
    #[error("reference count {count} exceeds the {requirement} units required at level {level}")]
    ReferenceCountOutOfRange {
        /// Reference level
        level: u32,
        /// Configured reference count
        count: u32,
        /// Units required at the reference level
        requirement: u32,
    },

    /// A level on the ladder requires zero units
    #[error("level {level} has a non-positive unit requirement")]
    NonPositiveRequirement {
        /// Offending level
        level: u32,
    },

    /// A phase definition is malformed
    #[error("invalid phase '{name}': {reason}")]
    InvalidPhase {
        /// Phase name
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// Ladder totals do not fit in 64 bits
    #[error("ladder goal overflows a 64-bit unit counter")]
    GoalOverflow,

    /// I/O error while reading a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
