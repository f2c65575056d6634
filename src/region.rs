//! Bounded map regions and their wanderer populations.
//!
//! A [`Region`] owns the wanderers spawned inside it, in spawn order, and
//! the decoys still burning there. Pursuers read a region immutably, so one
//! `&Region` acts as the population snapshot for a whole tick.

use glam::{IVec2, Vec2};
use log::{debug, info};
use ordered_float::OrderedFloat;

use crate::constants::{DECOY_FUSE_TICKS, TILE_SIZE};
use crate::decoy::{tile_at, Decoy};
use crate::error::DecoyError;
use crate::wanderer::{Wanderer, WandererHandle};

/// Provides the pixel extent of a region.
#[cfg_attr(test, mockall::automock)]
pub trait RegionBounds {
    /// Width and height in pixels.
    fn display_size(&self) -> Vec2;
}

/// Whether `point` lies inside `[0, w] × [0, h]` grown by `margin`.
#[must_use]
pub fn within_bounds<B: RegionBounds + ?Sized>(bounds: &B, point: Vec2, margin: f32) -> bool {
    let size = bounds.display_size();
    point.x >= -margin
        && point.y >= -margin
        && point.x <= size.x + margin
        && point.y <= size.y + margin
}

/// Identifier of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

/// A bounded map area.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: RegionId,
    size: Vec2,
    wanderers: Vec<Wanderer>,
    decoys: Vec<Decoy>,
    next_handle: u64,
}

impl RegionBounds for Region {
    fn display_size(&self) -> Vec2 {
        self.size
    }
}

impl Region {
    /// An empty region `size` pixels across.
    #[must_use]
    pub const fn new(id: RegionId, size: Vec2) -> Self {
        Self {
            id,
            size,
            wanderers: Vec::new(),
            decoys: Vec::new(),
            next_handle: 0,
        }
    }

    /// This region's identifier.
    #[must_use]
    pub const fn id(&self) -> RegionId {
        self.id
    }

    /// Live wanderers in spawn order.
    #[must_use]
    pub fn wanderers(&self) -> &[Wanderer] {
        &self.wanderers
    }

    /// Mutable access for the host loop.
    pub fn wanderers_mut(&mut self) -> &mut [Wanderer] {
        &mut self.wanderers
    }

    /// Look up one wanderer.
    #[must_use]
    pub fn wanderer(&self, handle: WandererHandle) -> Option<&Wanderer> {
        self.wanderers.iter().find(|w| w.handle == handle)
    }

    /// Decoys still burning, in arming order.
    #[must_use]
    pub fn decoys(&self) -> &[Decoy] {
        &self.decoys
    }

    /// Spawn hook: a decoy went off at `position`.
    ///
    /// Creates a wanderer at rest with no persisted target.
    pub fn on_decoy_detonated(&mut self, position: Vec2) -> WandererHandle {
        let handle = WandererHandle(self.next_handle);
        self.next_handle += 1;
        self.wanderers.push(Wanderer::spawn(handle, position));
        info!("{handle} spawned in region {} at {position:?}", self.id.0);
        handle
    }

    /// Remove a wanderer. Order of the survivors is preserved.
    pub fn despawn_wanderer(&mut self, handle: WandererHandle) -> Option<Wanderer> {
        let index = self.wanderers.iter().position(|w| w.handle == handle)?;
        debug!("{handle} despawned from region {}", self.id.0);
        Some(self.wanderers.remove(index))
    }

    /// Nearest wanderer to `from` by Euclidean distance.
    ///
    /// Ties resolve to the earliest spawned wanderer.
    #[must_use]
    pub fn nearest_wanderer(&self, from: Vec2) -> Option<&Wanderer> {
        self.wanderers
            .iter()
            .min_by_key(|w| OrderedFloat(w.position().distance_squared(from)))
    }

    /// Arm a decoy on `tile` with the standard fuse.
    ///
    /// # Errors
    /// [`DecoyError::TileOccupied`] if a decoy is already burning there and
    /// [`DecoyError::OutOfBounds`] if the tile is outside the region.
    pub fn arm_decoy(&mut self, tile: IVec2) -> Result<(), DecoyError> {
        let corner = tile.as_vec2() * TILE_SIZE;
        if tile.x < 0 || tile.y < 0 || corner.x >= self.size.x || corner.y >= self.size.y {
            return Err(DecoyError::OutOfBounds(tile));
        }
        if self.decoys.iter().any(|d| d.tile == tile) {
            return Err(DecoyError::TileOccupied(tile));
        }
        self.decoys.push(Decoy::armed(tile, DECOY_FUSE_TICKS));
        info!("Decoy armed on tile {tile} in region {}", self.id.0);
        Ok(())
    }

    /// Arm a decoy on the tile under a pixel position.
    ///
    /// # Errors
    /// As [`Self::arm_decoy`].
    pub fn arm_decoy_at(&mut self, position: Vec2) -> Result<IVec2, DecoyError> {
        let tile = tile_at(position);
        self.arm_decoy(tile)?;
        Ok(tile)
    }

    /// Burn every fuse one tick and detonate the spent ones.
    ///
    /// Returns the wanderers spawned this tick in arming order.
    pub fn tick_decoys(&mut self) -> Vec<WandererHandle> {
        let mut blasts = Vec::new();
        self.decoys.retain_mut(|decoy| {
            if decoy.burn() {
                blasts.push(decoy.blast_origin());
                false
            } else {
                true
            }
        });
        blasts
            .into_iter()
            .map(|origin| self.on_decoy_detonated(origin))
            .collect()
    }
}
