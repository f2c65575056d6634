//! Error types surfaced by the steering and decoy code.
//!
//! Steering errors are always recovered locally. They are returned inside a
//! [`crate::steering::StepOutcome`] so callers can observe them, and they are
//! logged as warnings at the point of recovery.

use glam::IVec2;
use thiserror::Error;

/// Why an agent's numeric state cannot be steered this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// Position holds a NaN or infinite component.
    NonFinitePosition,
    /// Velocity holds a NaN or infinite component.
    NonFiniteVelocity,
    /// Rotation is NaN or infinite.
    NonFiniteRotation,
    /// Position lies beyond the guard margin around the region.
    OutOfBounds,
}

/// Recoverable steering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SteeringError {
    /// A wanderer's stored target could not be decoded.
    #[error("invalid persisted target {raw:?}: {reason}")]
    InvalidPersistedTarget {
        /// The stored text as found.
        raw: String,
        /// What was wrong with it.
        reason: String,
    },
    /// The agent cannot be steered this tick.
    #[error("degenerate agent state: {0:?}")]
    DegenerateAgentState(DegenerateKind),
}

/// Failures arming a decoy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecoyError {
    /// A decoy is already burning on this tile.
    #[error("tile {0} already holds a burning decoy")]
    TileOccupied(IVec2),
    /// The tile lies outside the region.
    #[error("tile {0} lies outside the region")]
    OutOfBounds(IVec2),
}

/// Failures loading a [`crate::config::SteeringConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The values parsed but do not describe a usable profile.
    #[error("invalid {profile} profile: {detail}")]
    Invalid {
        /// Which profile failed validation.
        profile: &'static str,
        /// What was wrong with it.
        detail: String,
    },
}
