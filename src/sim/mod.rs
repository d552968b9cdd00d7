//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod angle;
pub mod gravitation;
pub mod particle;
pub mod point;
pub mod state;
pub mod tick;
pub mod velocity;

pub use angle::Angle;
pub use gravitation::{Gravitation, Pull};
pub use particle::{Footprint, Particle};
pub use point::Point;
pub use state::{SimState, random_particle, spawn_particles};
pub use tick::{step_particles, tick};
pub use velocity::Velocity;
