//! Small helpers for the slope and heading vectors used by steering.
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Returns the slope from `from` towards `to` in steering space.
///
/// The x component is negated so that headings derived with
/// `atan2(-slope.y, slope.x)` share the rotation convention of
/// [`forward`].
///
/// # Examples
/// ```
/// use decoy_steering::vector_math::steering_slope;
/// use glam::Vec2;
/// let slope = steering_slope(Vec2::ZERO, Vec2::new(3.0, 4.0));
/// assert_eq!(slope, Vec2::new(-3.0, 4.0));
/// ```
#[must_use]
pub fn steering_slope(from: Vec2, to: Vec2) -> Vec2 {
    Vec2::new(-(to.x - from.x), to.y - from.y)
}

/// Taxicab length of `slope`, floored at one to keep divisions finite.
///
/// # Examples
/// ```
/// use decoy_steering::vector_math::taxicab_floor;
/// use glam::Vec2;
/// assert_eq!(taxicab_floor(Vec2::new(-3.0, 4.0)), 7.0);
/// assert_eq!(taxicab_floor(Vec2::ZERO), 1.0);
/// ```
#[must_use]
pub fn taxicab_floor(slope: Vec2) -> f32 {
    (slope.x.abs() + slope.y.abs()).max(1.0)
}

/// Returns the forward axis for a rotation.
///
/// Thrust is applied along the negation of this vector.
#[must_use]
pub fn forward(rotation: f32) -> Vec2 {
    let heading = rotation + FRAC_PI_2;
    Vec2::new(heading.cos(), -heading.sin())
}

/// Whether every component of the vector is finite.
#[must_use]
pub const fn is_finite(vector: Vec2) -> bool {
    vector.x.is_finite() && vector.y.is_finite()
}
