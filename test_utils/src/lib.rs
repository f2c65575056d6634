//! Utility helpers for tests.
//!
//! Fixtures for building regions and agents, plus assertions shared by the
//! integration suites.
pub mod conversions;
pub mod fixtures;

use decoy_steering::Agent;
use std::f32::consts::TAU;

/// Assert that `angle` lies in `[0, 2π)`.
///
/// # Panics
/// Panics with the offending value when it is out of range.
pub fn assert_normalised(angle: f32) {
    assert!(
        (0.0..TAU).contains(&angle),
        "rotation {angle} outside [0, 2π)"
    );
}

/// Assert that two agents are identical down to the float bit patterns.
///
/// # Panics
/// Panics naming the first field that differs.
pub fn assert_bit_identical(left: &Agent, right: &Agent) {
    let bits = |agent: &Agent| {
        [
            agent.position.x.to_bits(),
            agent.position.y.to_bits(),
            agent.velocity.x.to_bits(),
            agent.velocity.y.to_bits(),
            agent.rotation.to_bits(),
            agent.target_rotation.to_bits(),
        ]
    };
    let names = [
        "position.x",
        "position.y",
        "velocity.x",
        "velocity.y",
        "rotation",
        "target_rotation",
    ];
    for ((name, l), r) in names.iter().zip(bits(left)).zip(bits(right)) {
        assert_eq!(l, r, "{name} differs: {left:?} vs {right:?}");
    }
    assert_eq!(left.turning_right, right.turning_right, "turning_right differs");
    assert_eq!(left.turn_cooldown, right.turn_cooldown, "turn_cooldown differs");
}
