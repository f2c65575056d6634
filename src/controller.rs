//! Per-tick entry points for wanderers and pursuers.
//!
//! [`SteeringController`] resolves a target for each call site and then runs
//! the shared [`steer`] update. Both entry points are pure: they read the
//! caller's state and return a new one, leaving the input untouched. Any
//! skipped step returns the input state unchanged.

use glam::Vec2;
use log::{debug, warn};
use rand::Rng;

use crate::agent::Agent;
use crate::config::SteeringConfig;
use crate::error::{DegenerateKind, SteeringError};
use crate::region::{within_bounds, Region, RegionBounds};
use crate::steering::{steer, SkipReason, StepOutcome, Stepped};
use crate::wanderer::{PersistedTarget, Wanderer};

/// Steering entry points configured once and shared across agents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SteeringController {
    config: SteeringConfig,
}

impl SteeringController {
    /// A controller using `config`.
    #[must_use]
    pub const fn new(config: SteeringConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Advance a wanderer one tick.
    ///
    /// A new uniform target inside `region` is chosen with
    /// `retarget_chance`, or whenever the stored one is missing, corrupt or
    /// outside the region. A corrupt stored target is reported in the
    /// outcome's `recovered` field.
    pub fn step_wanderer<B, R>(
        &self,
        wanderer: &Wanderer,
        region: &B,
        rng: &mut R,
    ) -> Stepped<Wanderer>
    where
        B: RegionBounds + ?Sized,
        R: Rng + ?Sized,
    {
        if let Some(error) = self.degenerate(&wanderer.agent, region) {
            warn!("Skipping {}: {error}", wanderer.handle);
            return Stepped::skipped(wanderer.clone(), SkipReason::Degenerate(error));
        }

        let wants_new_target = rng.gen::<f64>() < self.config.retarget_chance;
        let (stored, recovered) = match wanderer.target.as_ref().map(PersistedTarget::resolve) {
            Some(Ok(point)) if within_bounds(region, point, 0.0) => (Some(point), None),
            Some(Ok(point)) => {
                debug!("{} target {point:?} left the region", wanderer.handle);
                (None, None)
            }
            Some(Err(error)) => {
                warn!("{}: {error}; picking a new target", wanderer.handle);
                (None, Some(error))
            }
            None => (None, None),
        };

        let (target, retargeted) = match stored {
            Some(point) if !wants_new_target => (point, false),
            _ => (random_point(region, rng), true),
        };

        let agent = steer(&wanderer.agent, target, &self.config.wander, rng);
        Stepped {
            state: Wanderer {
                handle: wanderer.handle,
                agent,
                target: Some(PersistedTarget::Point(target)),
            },
            outcome: StepOutcome::Steered {
                retargeted,
                recovered,
            },
        }
    }

    /// Advance a pursuer one tick towards the nearest wanderer in `region`.
    ///
    /// With no wanderer present the agent is returned unchanged.
    pub fn step_pursuer<R>(&self, agent: &Agent, region: &Region, rng: &mut R) -> Stepped<Agent>
    where
        R: Rng + ?Sized,
    {
        if let Some(error) = self.degenerate(agent, region) {
            warn!("Skipping pursuer at {:?}: {error}", agent.position);
            return Stepped::skipped(*agent, SkipReason::Degenerate(error));
        }
        let Some(quarry) = region.nearest_wanderer(agent.position) else {
            debug!("No wanderer to pursue in region {}", region.id().0);
            return Stepped::skipped(*agent, SkipReason::NoPursuableTarget);
        };
        Stepped {
            state: steer(agent, quarry.position(), &self.config.pursue, rng),
            outcome: StepOutcome::STEERED,
        }
    }

    fn degenerate<B>(&self, agent: &Agent, region: &B) -> Option<SteeringError>
    where
        B: RegionBounds + ?Sized,
    {
        let kind = agent.non_finite().or_else(|| {
            (!within_bounds(region, agent.position, self.config.guard_margin))
                .then_some(DegenerateKind::OutOfBounds)
        })?;
        Some(SteeringError::DegenerateAgentState(kind))
    }
}

/// Uniform point inside the region. Degenerate extents collapse to zero.
fn random_point<B, R>(region: &B, rng: &mut R) -> Vec2
where
    B: RegionBounds + ?Sized,
    R: Rng + ?Sized,
{
    let size = region.display_size();
    let mut axis = |extent: f32| {
        if extent.is_finite() && extent > 0.0 {
            rng.gen_range(0.0..extent)
        } else {
            0.0
        }
    };
    let x = axis(size.x);
    let y = axis(size.y);
    Vec2::new(x, y)
}
