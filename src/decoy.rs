//! Armed decoys waiting to detonate.
use glam::{IVec2, Vec2};

use crate::constants::TILE_SIZE;

/// A lure placed on a tile with its fuse burning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoy {
    /// Tile the decoy sits on.
    pub tile: IVec2,
    /// Ticks left before detonation.
    pub fuse_remaining: u32,
}

impl Decoy {
    /// A freshly armed decoy.
    #[must_use]
    pub const fn armed(tile: IVec2, fuse: u32) -> Self {
        Self {
            tile,
            fuse_remaining: fuse,
        }
    }

    /// Burn one tick of fuse. Returns `true` once the fuse is spent.
    pub const fn burn(&mut self) -> bool {
        self.fuse_remaining = self.fuse_remaining.saturating_sub(1);
        self.fuse_remaining == 0
    }

    /// Pixel position where the detonation spawns its wanderer.
    #[must_use]
    pub fn blast_origin(&self) -> Vec2 {
        self.tile.as_vec2() * TILE_SIZE
    }
}

/// Tile containing a pixel position.
///
/// # Examples
/// ```
/// use decoy_steering::decoy::tile_at;
/// use glam::{IVec2, Vec2};
/// assert_eq!(tile_at(Vec2::new(130.0, 63.9)), IVec2::new(2, 0));
/// ```
#[must_use]
pub fn tile_at(position: Vec2) -> IVec2 {
    (position / TILE_SIZE).floor().as_ivec2()
}
