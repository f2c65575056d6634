//! Wanderer agents and their persisted targets.
//!
//! A wanderer remembers where it is heading between ticks. New code stores
//! the target as a typed point; targets imported from string-keyed entity
//! metadata arrive as `"x,y"` text and are decoded on use.

use std::fmt;

use glam::Vec2;

use crate::agent::Agent;
use crate::error::SteeringError;

/// Stable identifier of a spawned wanderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WandererHandle(pub u64);

impl WandererHandle {
    /// The raw identifier.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WandererHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wanderer#{}", self.0)
    }
}

/// A wanderer's remembered destination.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedTarget {
    /// Typed point in pixels.
    Point(Vec2),
    /// Legacy `"x,y"` text, decoded lazily.
    Encoded(String),
}

impl PersistedTarget {
    /// Legacy text form of `point`.
    ///
    /// # Examples
    /// ```
    /// use decoy_steering::wanderer::PersistedTarget;
    /// use glam::Vec2;
    /// assert_eq!(PersistedTarget::encode(Vec2::new(64.0, 12.5)), "64,12.5");
    /// ```
    #[must_use]
    pub fn encode(point: Vec2) -> String {
        format!("{},{}", point.x, point.y)
    }

    /// Decode legacy text into a point.
    ///
    /// # Errors
    /// Returns [`SteeringError::InvalidPersistedTarget`] when the text is not
    /// two finite comma-separated numbers.
    pub fn decode(raw: &str) -> Result<Vec2, SteeringError> {
        let invalid = |reason: &str| SteeringError::InvalidPersistedTarget {
            raw: raw.to_owned(),
            reason: reason.to_owned(),
        };
        let mut parts = raw.split(',');
        let (Some(x_text), Some(y_text), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected two comma-separated values"));
        };
        let x = x_text.trim().parse::<f32>().map_err(|e| invalid(&e.to_string()))?;
        let y = y_text.trim().parse::<f32>().map_err(|e| invalid(&e.to_string()))?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(invalid("coordinates must be finite"));
        }
        Ok(Vec2::new(x, y))
    }

    /// The stored point, decoding legacy text if needed.
    ///
    /// # Errors
    /// As [`Self::decode`].
    pub fn resolve(&self) -> Result<Vec2, SteeringError> {
        match self {
            Self::Point(point) => Ok(*point),
            Self::Encoded(raw) => Self::decode(raw),
        }
    }
}

impl From<Vec2> for PersistedTarget {
    fn from(point: Vec2) -> Self {
        Self::Point(point)
    }
}

/// A roaming agent spawned by a decoy detonation.
#[derive(Debug, Clone, PartialEq)]
pub struct Wanderer {
    /// Identifier assigned by the owning region.
    pub handle: WandererHandle,
    /// Steering state.
    pub agent: Agent,
    /// Remembered destination, if any.
    pub target: Option<PersistedTarget>,
}

impl Wanderer {
    /// A wanderer at rest with no destination.
    #[must_use]
    pub const fn spawn(handle: WandererHandle, position: Vec2) -> Self {
        Self {
            handle,
            agent: Agent::at_rest(position),
            target: None,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.agent.position
    }
}
