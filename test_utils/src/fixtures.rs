//! Builders for regions and agents used across integration suites.

use decoy_steering::{Agent, Region, RegionId, WandererHandle};
use glam::{IVec2, Vec2};

use crate::conversions::{Coords2D, TileCoords};

/// Builder for test [`Region`] instances.
pub struct RegionBuilder {
    region: Region,
    spawned: Vec<WandererHandle>,
}

impl RegionBuilder {
    /// Start an empty region of `size` pixels.
    #[must_use]
    pub fn new(size: impl Into<Coords2D>) -> Self {
        let extent: Coords2D = size.into();
        Self {
            region: Region::new(RegionId(0), Vec2::from(extent)),
            spawned: Vec::new(),
        }
    }

    /// Detonate a decoy at `position`, spawning a wanderer there.
    #[must_use]
    pub fn with_wanderer_at(mut self, position: impl Into<Coords2D>) -> Self {
        let at: Coords2D = position.into();
        let handle = self.region.on_decoy_detonated(Vec2::from(at));
        self.spawned.push(handle);
        self
    }

    /// Arm a decoy on `tile`.
    ///
    /// # Panics
    /// Panics if the tile is occupied or outside the region.
    #[must_use]
    pub fn with_decoy_on(mut self, tile: impl Into<TileCoords>) -> Self {
        let coords: TileCoords = tile.into();
        if let Err(err) = self.region.arm_decoy(IVec2::from(coords)) {
            panic!("fixture decoy could not be armed: {err}");
        }
        self
    }

    /// Build and return the configured region.
    #[must_use]
    pub fn build(self) -> Region {
        self.region
    }

    /// Build and return the region with its wanderers' handles in spawn order.
    #[must_use]
    pub fn build_with_handles(self) -> (Region, Vec<WandererHandle>) {
        (self.region, self.spawned)
    }
}

/// An agent at `position` facing `rotation` with a free heading decision.
#[must_use]
pub fn agent_facing(position: impl Into<Coords2D>, rotation: f32) -> Agent {
    let at: Coords2D = position.into();
    Agent {
        rotation,
        ..Agent::at_rest(Vec2::from(at))
    }
}

/// An agent whose heading is locked for `ticks`.
#[must_use]
pub fn locked_agent(position: impl Into<Coords2D>, ticks: i32) -> Agent {
    let at: Coords2D = position.into();
    Agent {
        turn_cooldown: ticks,
        target_rotation: 1.0,
        turning_right: true,
        ..Agent::at_rest(Vec2::from(at))
    }
}
