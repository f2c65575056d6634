//! Steering configuration.
//!
//! Defaults come from [`crate::constants`]. A JSON file may override any
//! subset of fields; missing fields keep their defaults.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CLOSE_THRESHOLD_FAR, CLOSE_THRESHOLD_NEAR, GUARD_MARGIN_TILES, JITTER_HUNDREDTHS,
    PURSUE_ACCEL_CEILING, PURSUE_ACCEL_FLOOR, PURSUE_BOOST, PURSUE_COOLDOWN_MAX,
    PURSUE_COOLDOWN_MIN, PURSUE_MAX_SPEED, TILE_SIZE, TURN_STEP, WANDER_ACCEL_CEILING,
    WANDER_ACCEL_FLOOR, WANDER_BOOST, WANDER_MAX_SPEED, WANDER_RETARGET_CHANCE,
};
use crate::error::ConfigError;

/// Inclusive range of ticks a heading stays locked after a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CooldownRange {
    /// Shortest lock.
    pub min: i32,
    /// Longest lock.
    pub max: i32,
}

impl CooldownRange {
    /// A range that always yields `ticks`.
    #[must_use]
    pub const fn fixed(ticks: i32) -> Self {
        Self {
            min: ticks,
            max: ticks,
        }
    }

    /// Draw a lock length. A fixed range consumes no randomness.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

/// Parameters for one steering call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SteeringProfile {
    /// Speed cap applied by the near-target boost and overshoot correction.
    pub max_speed: f32,
    /// Bonus acceleration. Any positive value also widens the boost radius.
    pub extra_velocity: f32,
    /// Multiplier applied to velocity when close to the target.
    pub boost_factor: f32,
    /// Lower bound for acceleration before `extra_velocity`.
    pub accel_floor: f32,
    /// Upper bound for acceleration before `extra_velocity`.
    pub accel_ceiling: f32,
    /// Radians turned per heading decision.
    pub turn_step: f32,
    /// Heading lock applied after each decision.
    pub cooldown: CooldownRange,
    /// Boost radius without extra velocity.
    pub close_threshold_near: f32,
    /// Boost radius with extra velocity.
    pub close_threshold_far: f32,
    /// Velocity noise bound, in hundredths.
    pub jitter_hundredths: i32,
}

impl SteeringProfile {
    /// Tuning used by spawned wanderers.
    #[must_use]
    pub const fn wanderer() -> Self {
        Self {
            max_speed: WANDER_MAX_SPEED,
            extra_velocity: 0.0,
            boost_factor: WANDER_BOOST,
            accel_floor: WANDER_ACCEL_FLOOR,
            accel_ceiling: WANDER_ACCEL_CEILING,
            turn_step: TURN_STEP,
            cooldown: CooldownRange::fixed(0),
            close_threshold_near: CLOSE_THRESHOLD_NEAR,
            close_threshold_far: CLOSE_THRESHOLD_FAR,
            jitter_hundredths: JITTER_HUNDREDTHS,
        }
    }

    /// Tuning used by pursuers homing in on wanderers.
    #[must_use]
    pub const fn pursuer() -> Self {
        Self {
            max_speed: PURSUE_MAX_SPEED,
            extra_velocity: 0.0,
            boost_factor: PURSUE_BOOST,
            accel_floor: PURSUE_ACCEL_FLOOR,
            accel_ceiling: PURSUE_ACCEL_CEILING,
            turn_step: TURN_STEP,
            cooldown: CooldownRange {
                min: PURSUE_COOLDOWN_MIN,
                max: PURSUE_COOLDOWN_MAX,
            },
            close_threshold_near: CLOSE_THRESHOLD_NEAR,
            close_threshold_far: CLOSE_THRESHOLD_FAR,
            jitter_hundredths: JITTER_HUNDREDTHS,
        }
    }

    /// Distance under which the near-target boost applies.
    #[must_use]
    pub fn close_threshold(&self) -> f32 {
        if self.extra_velocity > 0.0 {
            self.close_threshold_far
        } else {
            self.close_threshold_near
        }
    }

    fn validate(&self, profile: &'static str) -> Result<(), ConfigError> {
        let invalid = |detail: String| ConfigError::Invalid { profile, detail };
        let finite = [
            self.max_speed,
            self.extra_velocity,
            self.boost_factor,
            self.accel_floor,
            self.accel_ceiling,
            self.turn_step,
            self.close_threshold_near,
            self.close_threshold_far,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(invalid("all values must be finite".to_owned()));
        }
        if self.max_speed < 0.0 {
            return Err(invalid(format!("max_speed {} is negative", self.max_speed)));
        }
        if self.accel_floor > self.accel_ceiling {
            return Err(invalid(format!(
                "accel_floor {} exceeds accel_ceiling {}",
                self.accel_floor, self.accel_ceiling
            )));
        }
        if self.cooldown.min > self.cooldown.max {
            return Err(invalid(format!(
                "cooldown min {} exceeds max {}",
                self.cooldown.min, self.cooldown.max
            )));
        }
        if self.jitter_hundredths < 0 {
            return Err(invalid(format!(
                "jitter_hundredths {} is negative",
                self.jitter_hundredths
            )));
        }
        Ok(())
    }
}

impl Default for SteeringProfile {
    fn default() -> Self {
        Self::wanderer()
    }
}

const fn default_pursuer() -> SteeringProfile {
    SteeringProfile::pursuer()
}

/// Full controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SteeringConfig {
    /// Wanderer tuning.
    pub wander: SteeringProfile,
    /// Pursuer tuning. A partial section is completed from the pursuer
    /// defaults.
    #[serde(default = "default_pursuer", deserialize_with = "pursuer_profile")]
    pub pursue: SteeringProfile,
    /// Per-tick chance a wanderer picks a new target.
    pub retarget_chance: f64,
    /// Pixels an agent may stray outside its region before it is skipped.
    pub guard_margin: f32,
}

/// Completes a partial pursuer section from pursuer defaults rather than the
/// wanderer defaults `SteeringProfile::default` would supply.
fn pursuer_profile<'de, D>(deserializer: D) -> Result<SteeringProfile, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let overrides = serde_json::Value::deserialize(deserializer)?;
    let mut merged = serde_json::to_value(SteeringProfile::pursuer())
        .map_err(serde::de::Error::custom)?;
    if let (Some(base), serde_json::Value::Object(fields)) = (merged.as_object_mut(), overrides)
    {
        base.extend(fields);
    }
    serde_json::from_value(merged).map_err(serde::de::Error::custom)
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            wander: SteeringProfile::wanderer(),
            pursue: SteeringProfile::pursuer(),
            retarget_chance: WANDER_RETARGET_CHANCE,
            guard_margin: GUARD_MARGIN_TILES * TILE_SIZE,
        }
    }
}

impl SteeringConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a profile is unusable.
    ///
    /// # Examples
    /// ```
    /// use decoy_steering::config::SteeringConfig;
    /// let config = SteeringConfig::from_json_str(r#"{"wander": {"max_speed": 3.0}}"#).unwrap();
    /// assert_eq!(config.wander.max_speed, 3.0);
    /// assert_eq!(config.pursue.max_speed, 7.0);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check both profiles and the controller-wide values.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the offending section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wander.validate("wander")?;
        self.pursue.validate("pursue")?;
        if !(0.0..=1.0).contains(&self.retarget_chance) {
            return Err(ConfigError::Invalid {
                profile: "controller",
                detail: format!("retarget_chance {} outside [0, 1]", self.retarget_chance),
            });
        }
        if !self.guard_margin.is_finite() || self.guard_margin < 0.0 {
            return Err(ConfigError::Invalid {
                profile: "controller",
                detail: format!("guard_margin {} must be finite and >= 0", self.guard_margin),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rstest::rstest;

    #[test]
    fn defaults_validate() {
        assert!(SteeringConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_pursue_section_keeps_pursuer_defaults() {
        let config = SteeringConfig::from_json_str(r#"{"pursue": {"boost_factor": 1.2}}"#)
            .expect("config should parse");
        assert_eq!(config.pursue.max_speed, PURSUE_MAX_SPEED);
        assert!((config.pursue.boost_factor - 1.2).abs() < f32::EPSILON);
        assert_eq!(config.wander, SteeringProfile::wanderer());
    }

    #[rstest]
    #[case::floor_above_ceiling(r#"{"wander": {"accel_floor": 9.0}}"#)]
    #[case::negative_speed(r#"{"pursue": {"max_speed": -1.0}}"#)]
    #[case::inverted_cooldown(r#"{"pursue": {"cooldown": {"min": 5, "max": 2}}}"#)]
    #[case::chance_above_one(r#"{"retarget_chance": 1.5}"#)]
    fn rejects_unusable_values(#[case] text: &str) {
        let err = SteeringConfig::from_json_str(text).expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");
    }

    #[rstest]
    #[case::top_level(r#"{"retarget_chanse": 0.5}"#)]
    #[case::wander_section(r#"{"wander": {"max_sped": 3.0}}"#)]
    #[case::pursue_section(r#"{"pursue": {"max_sped": 3.0}}"#)]
    #[case::cooldown(r#"{"pursue": {"cooldown": {"min": 1, "max": 2, "step": 1}}}"#)]
    fn misspelt_keys_are_parse_errors(#[case] text: &str) {
        let err = SteeringConfig::from_json_str(text).expect_err("unknown key should be rejected");
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = SteeringConfig::from_json_str("{").expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn fixed_cooldown_consumes_no_randomness() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(CooldownRange::fixed(3).draw(&mut rng), 3);
        assert_eq!(rand::RngCore::next_u64(&mut rng), 0);
    }

    #[test]
    fn cooldown_draws_stay_in_range() {
        let range = SteeringProfile::pursuer().cooldown;
        let mut rng = crate::rng::seeded(7);
        for _ in 0..1000 {
            let ticks = range.draw(&mut rng);
            assert!((PURSUE_COOLDOWN_MIN..=PURSUE_COOLDOWN_MAX).contains(&ticks));
        }
    }
}
