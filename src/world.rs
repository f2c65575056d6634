//! Host-side simulation harness.
//!
//! [`Simulation`] stands in for the game loop that owns the agents. It
//! burns decoy fuses, calls the controller for every wanderer and pursuer,
//! then applies the host's default movement and cooldown decrement.

use glam::Vec2;
use hashbrown::HashMap;
use log::{debug, info};
use rand::Rng;

use crate::agent::Agent;
use crate::controller::SteeringController;
use crate::region::{Region, RegionId};
use crate::steering::{StepOutcome, Stepped};

/// A pursuer and the region it hunts in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pursuer {
    /// Region whose wanderers this pursuer chases.
    pub region: RegionId,
    /// Steering state.
    pub agent: Agent,
}

/// Tallies for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Wanderers spawned by detonations.
    pub spawned: usize,
    /// Agents the controller steered.
    pub steered: usize,
    /// Agents left unchanged.
    pub skipped: usize,
    /// Wanderers that picked a fresh target.
    pub retargeted: usize,
    /// Corrupt persisted targets recovered from.
    pub recovered: usize,
}

impl TickReport {
    fn record<T>(&mut self, step: &Stepped<T>) {
        match &step.outcome {
            StepOutcome::Steered {
                retargeted,
                recovered,
            } => {
                self.steered += 1;
                self.retargeted += usize::from(*retargeted);
                self.recovered += usize::from(recovered.is_some());
            }
            StepOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

/// Regions, pursuers and the controller driving them.
#[derive(Debug, Default)]
pub struct Simulation {
    controller: SteeringController,
    regions: HashMap<RegionId, Region>,
    pursuers: Vec<Pursuer>,
    tick_count: u64,
}

impl Simulation {
    /// An empty simulation using `controller`.
    #[must_use]
    pub fn new(controller: SteeringController) -> Self {
        Self {
            controller,
            ..Self::default()
        }
    }

    /// Add or replace a region.
    pub fn insert_region(&mut self, region: Region) {
        self.regions.insert(region.id(), region);
    }

    /// Look up a region.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    /// Mutable region access for arming decoys or despawning wanderers.
    pub fn region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(&id)
    }

    /// Add a pursuer at rest. Returns its index.
    pub fn add_pursuer(&mut self, region: RegionId, position: Vec2) -> usize {
        debug!("Pursuer added to region {} at {position:?}", region.0);
        self.pursuers.push(Pursuer {
            region,
            agent: Agent::at_rest(position),
        });
        self.pursuers.len() - 1
    }

    /// All pursuers in insertion order.
    #[must_use]
    pub fn pursuers(&self) -> &[Pursuer] {
        &self.pursuers
    }

    /// Ticks run so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Run one tick.
    ///
    /// Regions are visited in id order so a seed reproduces a run exactly.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickReport {
        self.tick_count += 1;
        let mut report = TickReport::default();
        let mut ids: Vec<RegionId> = self.regions.keys().copied().collect();
        ids.sort_unstable();

        for id in &ids {
            let Some(region) = self.regions.get_mut(id) else {
                continue;
            };
            report.spawned += region.tick_decoys().len();
            let stepped: Vec<_> = region
                .wanderers()
                .iter()
                .map(|w| self.controller.step_wanderer(w, &*region, &mut *rng))
                .collect();
            for (slot, step) in region.wanderers_mut().iter_mut().zip(stepped) {
                report.record(&step);
                *slot = step.state;
            }
        }

        for pursuer in &mut self.pursuers {
            let Some(region) = self.regions.get(&pursuer.region) else {
                continue;
            };
            let step = self.controller.step_pursuer(&pursuer.agent, region, rng);
            report.record(&step);
            pursuer.agent = step.state;
        }

        for region in self.regions.values_mut() {
            for wanderer in region.wanderers_mut() {
                wanderer.agent.integrate();
                wanderer.agent.tick_cooldown();
            }
        }
        for pursuer in &mut self.pursuers {
            pursuer.agent.integrate();
            pursuer.agent.tick_cooldown();
        }

        if report.spawned > 0 {
            info!("Tick {}: {} wanderer(s) spawned", self.tick_count, report.spawned);
        }
        debug!("Tick {}: {report:?}", self.tick_count);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DECOY_FUSE_TICKS;
    use crate::rng::seeded;
    use glam::IVec2;

    fn world() -> Simulation {
        let mut sim = Simulation::default();
        sim.insert_region(Region::new(RegionId(0), Vec2::new(1280.0, 1280.0)));
        sim
    }

    #[test]
    fn pursuers_coast_until_a_decoy_goes_off() {
        let mut sim = world();
        sim.add_pursuer(RegionId(0), Vec2::new(100.0, 100.0));
        sim.region_mut(RegionId(0))
            .expect("region exists")
            .arm_decoy(IVec2::new(10, 10))
            .expect("tile is free");

        let mut rng = seeded(3);
        for _ in 1..DECOY_FUSE_TICKS {
            let report = sim.tick(&mut rng);
            assert_eq!(report.skipped, 1);
            assert_eq!(report.steered, 0);
        }
        let report = sim.tick(&mut rng);
        assert_eq!(report.spawned, 1);
        assert_eq!(report.steered, 2);
        assert_eq!(sim.tick_count(), u64::from(DECOY_FUSE_TICKS));
    }

    #[test]
    fn pursuer_in_empty_region_is_skipped() {
        let mut sim = world();
        sim.insert_region(Region::new(RegionId(1), Vec2::new(64.0, 64.0)));
        sim.add_pursuer(RegionId(1), Vec2::new(10.0, 10.0));
        let report = sim.tick(&mut seeded(1));
        assert_eq!(report.skipped, 1);
        assert_eq!(sim.pursuers()[0].agent.position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn runs_are_reproducible() {
        let run = |seed| {
            let mut sim = world();
            sim.add_pursuer(RegionId(0), Vec2::new(900.0, 200.0));
            sim.region_mut(RegionId(0))
                .expect("region exists")
                .on_decoy_detonated(Vec2::new(300.0, 700.0));
            let mut rng = seeded(seed);
            for _ in 0..300 {
                sim.tick(&mut rng);
            }
            sim.pursuers()[0].agent
        };
        assert_eq!(run(21), run(21));
    }
}
