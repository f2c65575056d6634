//! Seek-and-turn steering update.
//!
//! [`steer`] advances one agent's velocity and heading towards a resolved
//! target. Wanderers and pursuers share it and differ only in their
//! [`SteeringProfile`] and in how the target is chosen (see
//! [`crate::controller`]).
//!
//! Randomness is drawn in a fixed order: turn-around coin flip (only when the
//! heading error exceeds [`TURN_AROUND_THRESHOLD`]), cooldown length (only
//! for non-fixed ranges), then x and y jitter.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;

use crate::agent::Agent;
use crate::config::SteeringProfile;
use crate::constants::{
    ACCEL_FALLOFF, THRUST_DIVISOR, TURN_AROUND_THRESHOLD, TURN_SETTLE_THRESHOLD,
};
use crate::error::SteeringError;
use crate::numeric::{hundredths, normalize_angle, sign};
use crate::vector_math::{forward, steering_slope, taxicab_floor};

/// Why an agent was left untouched this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No wanderer exists in the pursuer's region.
    NoPursuableTarget,
    /// The agent's state cannot be steered.
    Degenerate(SteeringError),
}

/// Result classification of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The agent was steered.
    Steered {
        /// A wanderer picked a fresh target this tick.
        retargeted: bool,
        /// A recovered problem encountered on the way.
        recovered: Option<SteeringError>,
    },
    /// The agent was returned unchanged.
    Skipped(SkipReason),
}

impl StepOutcome {
    /// Plain steered outcome without retargeting or recovery.
    pub const STEERED: Self = Self::Steered {
        retargeted: false,
        recovered: None,
    };

    /// Whether the agent was left unchanged.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// New state produced by a step together with how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Stepped<T> {
    /// State after the step.
    pub state: T,
    /// What happened.
    pub outcome: StepOutcome,
}

impl<T> Stepped<T> {
    /// A step that left `state` unchanged.
    pub const fn skipped(state: T, reason: SkipReason) -> Self {
        Self {
            state,
            outcome: StepOutcome::Skipped(reason),
        }
    }
}

/// Advance `agent` one tick towards `target`.
///
/// Heading and turn preference only change when `turn_cooldown <= 0`. The
/// returned rotation is wrapped into `[0, 2π)` whenever a heading decision
/// is made.
#[must_use]
pub fn steer<R: Rng + ?Sized>(
    agent: &Agent,
    target: Vec2,
    profile: &SteeringProfile,
    rng: &mut R,
) -> Agent {
    let mut next = *agent;
    let slope = steering_slope(agent.position, target);
    let distance = taxicab_floor(slope);

    if distance < profile.close_threshold() {
        let limit = Vec2::splat(profile.max_speed);
        next.velocity = (next.velocity * profile.boost_factor).clamp(-limit, limit);
    }

    let unit_slope = slope / distance;
    if next.turn_cooldown <= 0 {
        turn_towards(&mut next, unit_slope, profile, rng);
    }

    let accel = (profile.accel_ceiling - distance / ACCEL_FALLOFF)
        .clamp(profile.accel_floor, profile.accel_ceiling)
        + profile.extra_velocity;
    let facing = forward(next.rotation);
    let thrust = -facing * accel / THRUST_DIVISOR;
    let jitter = Vec2::new(
        draw_jitter(profile.jitter_hundredths, rng),
        draw_jitter(profile.jitter_hundredths, rng),
    );
    next.velocity += thrust + jitter;
    next.velocity = correct_overshoot(next.velocity, facing, thrust, profile.max_speed);
    next
}

fn turn_towards<R: Rng + ?Sized>(
    agent: &mut Agent,
    unit_slope: Vec2,
    profile: &SteeringProfile,
    rng: &mut R,
) {
    agent.target_rotation = (-unit_slope.y).atan2(unit_slope.x) - FRAC_PI_2;

    let error = agent.target_rotation.abs() - agent.rotation.abs();
    if error > TURN_AROUND_THRESHOLD && rng.gen_bool(0.5) {
        agent.turning_right = true;
    } else if error < TURN_SETTLE_THRESHOLD {
        agent.turning_right = false;
    }

    let direction = sign(agent.target_rotation - agent.rotation);
    if agent.turning_right {
        agent.rotation -= direction * profile.turn_step;
    } else {
        agent.rotation += direction * profile.turn_step;
    }
    agent.rotation = normalize_angle(agent.rotation);
    agent.turn_cooldown = profile.cooldown.draw(rng);
}

fn draw_jitter<R: Rng + ?Sized>(bound: i32, rng: &mut R) -> f32 {
    if bound <= 0 {
        return 0.0;
    }
    hundredths(rng.gen_range(-bound..bound))
}

/// Undo this tick's thrust on any axis whose speed exceeds the directional
/// limit `|facing * max_speed|`.
///
/// # Examples
/// ```
/// use decoy_steering::steering::correct_overshoot;
/// use glam::Vec2;
/// let facing = Vec2::new(-1.0, 0.0);
/// let thrust = Vec2::new(0.5, 0.0);
/// let corrected = correct_overshoot(Vec2::new(9.0, 0.0), facing, thrust, 7.0);
/// assert_eq!(corrected, Vec2::new(8.5, 0.0));
/// ```
#[must_use]
pub fn correct_overshoot(velocity: Vec2, facing: Vec2, thrust: Vec2, max_speed: f32) -> Vec2 {
    let limit = (-facing * max_speed).abs();
    let mut corrected = velocity;
    if corrected.x.abs() > limit.x {
        corrected.x -= thrust.x;
    }
    if corrected.y.abs() > limit.y {
        corrected.y -= thrust.y;
    }
    corrected
}
