//! Steering and decoy constants used across the crate.
//!
//! These are the default tunings. [`crate::config::SteeringConfig`] can
//! override the steering ones at runtime.
use std::f32::consts::PI;

/// Edge length of one map tile in pixels.
pub const TILE_SIZE: f32 = 64.0;
/// Agents further than this many tiles outside their region are not steered.
pub const GUARD_MARGIN_TILES: f32 = 10.0;
/// Per-tick probability that a wanderer abandons its target for a new one.
pub const WANDER_RETARGET_CHANCE: f64 = 0.01;

/// Heading change applied per steering decision (radians).
pub const TURN_STEP: f32 = PI / 64.0;
/// Heading error above which an agent may commit to turning the other way.
pub const TURN_AROUND_THRESHOLD: f32 = PI * 7.0 / 8.0;
/// Heading error below which the turn-around commitment is released.
pub const TURN_SETTLE_THRESHOLD: f32 = PI / 8.0;
/// Divisor turning the taxicab distance into an acceleration falloff.
pub const ACCEL_FALLOFF: f32 = 128.0;
/// Divisor scaling acceleration into a per-tick velocity change.
pub const THRUST_DIVISOR: f32 = 6.0;

/// Distance below which agents without extra velocity get the speed boost.
pub const CLOSE_THRESHOLD_NEAR: f32 = 64.0;
/// Distance below which agents with extra velocity get the speed boost.
pub const CLOSE_THRESHOLD_FAR: f32 = 192.0;
/// Jitter bound in hundredths of a velocity unit; draws land in `[-b, b)`.
pub const JITTER_HUNDREDTHS: i32 = 10;

/// Speed cap for wanderers.
pub const WANDER_MAX_SPEED: f32 = 5.0;
/// Near-target boost multiplier for wanderers.
pub const WANDER_BOOST: f32 = 1.05;
/// Lowest wanderer acceleration before extra velocity is added.
pub const WANDER_ACCEL_FLOOR: f32 = 1.0;
/// Highest wanderer acceleration before extra velocity is added.
pub const WANDER_ACCEL_CEILING: f32 = 5.0;

/// Speed cap for pursuers.
pub const PURSUE_MAX_SPEED: f32 = 7.0;
/// Near-target boost multiplier for pursuers.
pub const PURSUE_BOOST: f32 = 1.10;
/// Lowest pursuer acceleration.
pub const PURSUE_ACCEL_FLOOR: f32 = 2.0;
/// Highest pursuer acceleration.
pub const PURSUE_ACCEL_CEILING: f32 = 7.0;
/// Shortest heading lock after a pursuer turns, in ticks.
pub const PURSUE_COOLDOWN_MIN: i32 = 4;
/// Longest heading lock after a pursuer turns, in ticks.
pub const PURSUE_COOLDOWN_MAX: i32 = 6;

/// Ticks a decoy burns before detonating: 24 frames of 100 ms at 60 Hz.
pub const DECOY_FUSE_TICKS: u32 = 144;
