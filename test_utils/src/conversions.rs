//! Conversion helpers for test coordinate newtypes.
//! Centralises `From` implementations enabling literal usage in tests.

use glam::{IVec2, Vec2};

/// Pixel coordinates written as a tuple literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coords2D {
    /// Horizontal pixel offset.
    pub x: f32,
    /// Vertical pixel offset, growing downwards.
    pub y: f32,
}

/// Tile coordinates written as a tuple literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileCoords {
    /// Tile column.
    pub x: i32,
    /// Tile row.
    pub y: i32,
}

macro_rules! impl_coords2_conversions {
    ($name:ident, $ty:ty, $vec:ty) => {
        impl From<($ty, $ty)> for $name {
            fn from((x, y): ($ty, $ty)) -> Self {
                Self { x, y }
            }
        }
        impl From<$name> for $vec {
            fn from(coords: $name) -> Self {
                <$vec>::new(coords.x, coords.y)
            }
        }
    };
}

impl_coords2_conversions!(Coords2D, f32, Vec2);
impl_coords2_conversions!(TileCoords, i32, IVec2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_become_vectors() {
        let pixel: Vec2 = Coords2D::from((1.5, -2.0)).into();
        let tile: IVec2 = TileCoords::from((3, 4)).into();
        assert_eq!(pixel, Vec2::new(1.5, -2.0));
        assert_eq!(tile, IVec2::new(3, 4));
    }
}
