//! Steerable agent state.
use glam::Vec2;

use crate::error::DegenerateKind;
use crate::vector_math::is_finite;

/// Kinematic and heading state of one steerable entity.
///
/// The controller never moves `position`; the host integrates velocity and
/// decrements `turn_cooldown` once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    /// Centre of the entity in pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick. The y component is up-positive, the
    /// opposite of screen-space `position.y`.
    pub velocity: Vec2,
    /// Heading in radians, kept in `[0, 2π)` by the controller.
    pub rotation: f32,
    /// Most recent desired heading.
    pub target_rotation: f32,
    /// Sticky preference for turning against the shortest direction.
    pub turning_right: bool,
    /// Ticks until the next heading decision is allowed.
    pub turn_cooldown: i32,
}

impl Agent {
    /// An agent at rest at `position`.
    #[must_use]
    pub const fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            target_rotation: 0.0,
            turning_right: false,
            turn_cooldown: 0,
        }
    }

    /// Host-side cooldown decrement. Stops at zero.
    pub const fn tick_cooldown(&mut self) {
        if self.turn_cooldown > 0 {
            self.turn_cooldown -= 1;
        }
    }

    /// Host default movement: advance `position` by one tick of velocity.
    pub fn integrate(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y -= self.velocity.y;
    }

    /// Reports the first non-finite component, if any.
    #[must_use]
    pub const fn non_finite(&self) -> Option<DegenerateKind> {
        if !is_finite(self.position) {
            Some(DegenerateKind::NonFinitePosition)
        } else if !is_finite(self.velocity) {
            Some(DegenerateKind::NonFiniteVelocity)
        } else if !self.rotation.is_finite() || !self.target_rotation.is_finite() {
            Some(DegenerateKind::NonFiniteRotation)
        } else {
            None
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::at_rest(Vec2::ZERO)
    }
}
