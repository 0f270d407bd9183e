//! Progression engine.
//!
//! Maps calendar dates onto a bounded ladder of levels, aggregates progress
//! statistics, and projects when the ladder will be finished.

#![warn(missing_docs)]

pub mod engine;
pub mod stats;
pub mod phase;
pub mod estimator;
pub mod tracker;

pub use engine::ProgressionEngine;
pub use tracker::{ProgressTracker, ProgressSnapshot};
