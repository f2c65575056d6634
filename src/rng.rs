//! Seedable randomness for steering.
//!
//! The controller accepts any [`rand::Rng`]. Simulations and tests use
//! [`SteeringRng`] so a seed fully determines every draw.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Reproducible generator used by the simulation harness.
pub type SteeringRng = Pcg64Mcg;

/// Build a generator from a seed.
///
/// # Examples
/// ```
/// use decoy_steering::rng::seeded;
/// use rand::Rng;
/// let a: u32 = seeded(42).gen();
/// let b: u32 = seeded(42).gen();
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded(seed: u64) -> SteeringRng {
    Pcg64Mcg::seed_from_u64(seed)
}
