//! Property and scenario tests for the wanderer and pursuer entry points.
use std::f32::consts::{PI, TAU};

use approx::assert_relative_eq;
use decoy_steering::prelude::*;
use decoy_steering::{
    correct_overshoot, steer, PersistedTarget, SkipReason, SteeringConfig, SteeringError,
    SteeringProfile, StepOutcome, TURN_STEP,
};
use decoy_steering::vector_math::forward;
use rstest::{fixture, rstest};
use test_utils::fixtures::{agent_facing, locked_agent, RegionBuilder};
use test_utils::{assert_bit_identical, assert_normalised};

#[fixture]
fn controller() -> SteeringController {
    SteeringController::default()
}

#[rstest]
fn rotation_stays_in_range_for_both_call_sites(controller: SteeringController) {
    let (region, handles) = RegionBuilder::new((1280.0, 960.0))
        .with_wanderer_at((640.0, 480.0))
        .build_with_handles();
    let mut wanderer = region
        .wanderer(handles[0])
        .cloned()
        .unwrap_or_else(|| panic!("wanderer {} missing", handles[0]));
    let mut pursuer = agent_facing((100.0, 900.0), 6.0);
    let mut rng = seeded(99);

    for _ in 0..5_000 {
        wanderer = controller.step_wanderer(&wanderer, &region, &mut rng).state;
        pursuer = controller.step_pursuer(&pursuer, &region, &mut rng).state;
        pursuer.tick_cooldown();
        assert_normalised(wanderer.agent.rotation);
        assert_normalised(pursuer.rotation);
    }
}

#[rstest]
#[case::facing_right(PI / 2.0)]
#[case::facing_down(PI)]
#[case::diagonal(PI / 4.0)]
fn overshoot_correction_pulls_back_towards_limit(#[case] rotation: f32) {
    let facing = forward(rotation);
    let thrust = -facing * 5.0 / 6.0;
    let limit = 7.0;
    // Already beyond the directional limit, and pushed further by thrust.
    let velocity = -facing * (limit + 2.0) + thrust;
    let corrected = correct_overshoot(velocity, facing, thrust, limit);
    assert!(corrected.length() < velocity.length());
}

#[rstest]
fn locked_heading_ignores_target_position(controller: SteeringController) {
    let mut rng = seeded(5);
    for target in [(10.0, 10.0), (600.0, 20.0), (300.0, 470.0)] {
        let region = RegionBuilder::new((640.0, 480.0))
            .with_wanderer_at(target)
            .build();
        let agent = locked_agent((320.0, 240.0), 3);

        let pursued = controller.step_pursuer(&agent, &region, &mut rng).state;
        assert_eq!(pursued.target_rotation.to_bits(), agent.target_rotation.to_bits());
        assert_eq!(pursued.turning_right, agent.turning_right);

        let wanderer = Wanderer {
            agent,
            ..region.wanderers()[0].clone()
        };
        let wandered = controller.step_wanderer(&wanderer, &region, &mut rng).state;
        assert_eq!(
            wandered.agent.target_rotation.to_bits(),
            agent.target_rotation.to_bits()
        );
        assert_eq!(wandered.agent.turning_right, agent.turning_right);
    }
}

#[rstest]
fn identical_draws_give_identical_steps(controller: SteeringController) {
    let region = RegionBuilder::new((640.0, 480.0))
        .with_wanderer_at((500.0, 100.0))
        .with_wanderer_at((50.0, 400.0))
        .build();
    let pursuer = agent_facing((320.0, 240.0), 2.0);
    let wanderer = region.wanderers()[1].clone();

    let chase_a = controller.step_pursuer(&pursuer, &region, &mut seeded(1234));
    let chase_b = controller.step_pursuer(&pursuer, &region, &mut seeded(1234));
    assert_bit_identical(&chase_a.state, &chase_b.state);

    let wander_a = controller.step_wanderer(&wanderer, &region, &mut seeded(4321));
    let wander_b = controller.step_wanderer(&wanderer, &region, &mut seeded(4321));
    assert_bit_identical(&wander_a.state.agent, &wander_b.state.agent);
    assert_eq!(wander_a.state.target, wander_b.state.target);
}

#[rstest]
fn wander_retarget_rate_converges_to_one_percent(controller: SteeringController) {
    const TICKS: usize = 100_000;
    let region = RegionBuilder::new((1280.0, 960.0)).build();
    let mut wanderer = Wanderer {
        target: Some(PersistedTarget::Point(Vec2::new(100.0, 100.0))),
        ..Wanderer::spawn(decoy_steering::WandererHandle(0), Vec2::new(640.0, 480.0))
    };
    let mut rng = seeded(2024);
    let mut retargets = 0_usize;

    for _ in 0..TICKS {
        let step = controller.step_wanderer(&wanderer, &region, &mut rng);
        match step.outcome {
            StepOutcome::Steered { retargeted, .. } => retargets += usize::from(retargeted),
            StepOutcome::Skipped(reason) => panic!("unexpected skip: {reason:?}"),
        }
        wanderer = step.state;
    }

    // Expected 1000 with a standard deviation of about 31.5.
    assert!(
        (850..=1150).contains(&retargets),
        "retargeted {retargets} times in {TICKS} ticks"
    );
}

#[test]
fn heading_towards_target_on_the_right() {
    let agent = Agent::at_rest(Vec2::ZERO);
    let profile = SteeringProfile::pursuer();
    let next = steer(&agent, Vec2::new(100.0, 0.0), &profile, &mut seeded(0));

    // atan2(-0, -1) - π/2: a heading of +x, i.e. π/2 once wrapped.
    assert_relative_eq!(next.target_rotation, -3.0 * PI / 2.0, epsilon = 1e-5);
    assert_relative_eq!(next.target_rotation.rem_euclid(TAU), PI / 2.0, epsilon = 1e-5);
    let moved = next.rotation.min(TAU - next.rotation);
    assert_relative_eq!(moved, TURN_STEP, epsilon = 1e-5);
}

#[test]
fn nearest_of_three_wanderers() {
    let from = Vec2::new(200.0, 200.0);
    let (region, handles) = RegionBuilder::new((640.0, 480.0))
        .with_wanderer_at((210.0, 200.0))
        .with_wanderer_at((200.0, 195.0))
        .with_wanderer_at((200.0, 220.0))
        .build_with_handles();
    let nearest = region.nearest_wanderer(from).map(|w| w.handle);
    assert_eq!(nearest, Some(handles[1]));
}

#[rstest]
fn pursuer_without_wanderers_is_bit_identical(controller: SteeringController) {
    let region = RegionBuilder::new((640.0, 480.0)).build();
    let agent = Agent {
        velocity: Vec2::new(-0.7, 3.3),
        rotation: 4.0,
        target_rotation: -1.0,
        ..Agent::at_rest(Vec2::new(30.0, 30.0))
    };
    let step = controller.step_pursuer(&agent, &region, &mut seeded(7));
    assert_eq!(step.outcome, StepOutcome::Skipped(SkipReason::NoPursuableTarget));
    assert_bit_identical(&step.state, &agent);
}

#[rstest]
fn corrupted_persisted_target_is_replaced(controller: SteeringController) {
    decoy_steering::init_logging(false);
    let region = RegionBuilder::new((640.0, 480.0)).build();
    let wanderer = Wanderer {
        target: Some(PersistedTarget::Encoded("NaN-ish,??".to_owned())),
        ..Wanderer::spawn(decoy_steering::WandererHandle(9), Vec2::new(320.0, 240.0))
    };

    let step = controller.step_wanderer(&wanderer, &region, &mut seeded(31));
    assert!(matches!(
        step.outcome,
        StepOutcome::Steered {
            retargeted: true,
            recovered: Some(SteeringError::InvalidPersistedTarget { .. }),
        }
    ));
    let Some(PersistedTarget::Point(target)) = step.state.target else {
        panic!("expected a fresh typed target, got {:?}", step.state.target);
    };
    assert!((0.0..640.0).contains(&target.x));
    assert!((0.0..480.0).contains(&target.y));
}

#[test]
fn custom_config_changes_pursuit_speed_cap() {
    let config = SteeringConfig::from_json_str(r#"{"pursue": {"max_speed": 2.0}}"#)
        .unwrap_or_else(|e| panic!("config should parse: {e}"));
    let controller = SteeringController::new(config);
    let region = RegionBuilder::new((640.0, 480.0))
        .with_wanderer_at((330.0, 240.0))
        .build();
    let fast = Agent {
        velocity: Vec2::new(6.0, 6.0),
        turn_cooldown: 10,
        ..Agent::at_rest(Vec2::new(320.0, 240.0))
    };
    // Inside the boost radius velocity is clamped to the configured cap. The
    // heading is locked facing up, so this tick's thrust is undone on y and
    // only jitter remains.
    let step = controller.step_pursuer(&fast, &region, &mut seeded(3));
    assert_relative_eq!(step.state.velocity.x, 2.0, epsilon = 0.11);
    assert_relative_eq!(step.state.velocity.y, 2.0, epsilon = 0.11);
}
