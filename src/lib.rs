//! Particle Gravity - N point-masses pulling on each other, one frame at a time
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, particles, pairwise attraction, frame step)
//! - `platform`: Clock/input/render seams and the frame loop that drives them
//! - `renderer`: WebGPU disc renderer
//! - `settings`: Window size, particle count and seed

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Default window width in pixels
    pub const DEFAULT_WIDTH: u32 = 800;
    /// Default window height in pixels
    pub const DEFAULT_HEIGHT: u32 = 600;
    /// Default number of simulated particles
    pub const PARTICLE_COUNT: usize = 25;

    /// Gravitational constant used by the pairwise attraction
    pub const G: f64 = 6.67e-11;

    /// Spawn ranges (half-open, integer draws)
    pub const SPAWN_SPEED_MIN: u32 = 20;
    pub const SPAWN_SPEED_MAX: u32 = 120;
    pub const SPAWN_MASS_MIN: u32 = 20;
    pub const SPAWN_MASS_MAX: u32 = 320;

    /// Radius = ln(mass) * RADIUS_SCALE
    pub const RADIUS_SCALE: f64 = 3.0;
}

/// Wrap `value` into `[0, full)`.
///
/// `rem_euclid` can round up to exactly `full` for tiny negative inputs, which
/// would break the half-open range, so that case folds back to zero.
#[inline]
fn wrap_positive(value: f64, full: f64) -> f64 {
    let wrapped = value.rem_euclid(full);
    if wrapped >= full { 0.0 } else { wrapped }
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    wrap_positive(degrees, 360.0)
}

/// Normalize an angle in radians to [0, 2π)
#[inline]
pub fn normalize_radians(radians: f64) -> f64 {
    wrap_positive(radians, std::f64::consts::TAU)
}

/// Relative-epsilon equality: `|a - b| <= ε·|a|`
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::EPSILON * a.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_normalize_radians() {
        use std::f64::consts::{PI, TAU};
        assert!((normalize_radians(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!(normalize_radians(TAU) < TAU);
        assert!(normalize_radians(-1e-300) < TAU);
    }

    #[test]
    fn test_approx_eq_is_relative() {
        assert!(approx_eq(1.0, 1.0));
        assert!(approx_eq(1e6, 1e6 + 1e-10));
        assert!(!approx_eq(1.0, 1.0 + 1e-9));
        // Zero only equals zero under a relative rule
        assert!(approx_eq(0.0, 0.0));
        assert!(!approx_eq(0.0, 1e-300));
    }
}
