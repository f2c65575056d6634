//! Steering for lure wanderers and the pursuers drawn to them.
//!
//! A detonated decoy spawns a wanderer that roams a region towards random
//! targets; pursuers home in on the nearest wanderer. Both share one
//! seek-and-turn update with turn-rate limiting, hysteresis and speed
//! clamping. All randomness is injected so runs are reproducible.
pub mod agent;
pub mod config;
pub mod constants;
pub mod controller;
pub mod decoy;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod region;
pub mod rng;
pub mod steering;
pub mod vector_math;
pub mod wanderer;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use agent::Agent;
pub use config::{CooldownRange, SteeringConfig, SteeringProfile};
pub use controller::SteeringController;
pub use decoy::Decoy;
pub use error::{ConfigError, DecoyError, DegenerateKind, SteeringError};
pub use logging::init as init_logging;
pub use region::{Region, RegionBounds, RegionId};
pub use steering::{correct_overshoot, steer, SkipReason, StepOutcome, Stepped};
pub use wanderer::{PersistedTarget, Wanderer, WandererHandle};
pub use world::{Pursuer, Simulation, TickReport};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use decoy_steering::prelude::*;
    //! let controller = SteeringController::default();
    //! let mut region = Region::new(RegionId(0), Vec2::new(640.0, 480.0));
    //! region.on_decoy_detonated(Vec2::new(320.0, 240.0));
    //! let pursuer = Agent::at_rest(Vec2::new(10.0, 10.0));
    //! let step = controller.step_pursuer(&pursuer, &region, &mut seeded(1));
    //! assert!(!step.outcome.is_skipped());
    //! ```

    pub use crate::rng::seeded;
    pub use crate::Agent;
    pub use crate::Region;
    pub use crate::RegionId;
    pub use crate::SteeringController;
    pub use crate::Wanderer;
    pub use glam::Vec2;
}
