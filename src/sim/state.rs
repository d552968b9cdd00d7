//! Simulation state and initial particle spawn
//!
//! The particle collection is created once and only mutated in place after
//! that. Its order is the iteration order of every frame, which fixes the
//! order of floating-point accumulation.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::particle::Particle;
use super::point::Point;
use super::velocity::Velocity;
use crate::Settings;
use crate::consts::*;

/// Complete simulation state (deterministic given seed and frame timings)
#[derive(Debug, Clone, Serialize)]
pub struct SimState {
    /// Seed the particles were spawned from
    pub seed: u64,
    /// Reflection bounds
    pub width: f64,
    pub height: f64,
    /// Frames advanced so far
    pub frame: u64,
    pub particles: Vec<Particle>,
}

impl SimState {
    /// Spawn `settings.particle_count` random particles from `seed`
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = spawn_particles(
            &mut rng,
            settings.particle_count,
            settings.width,
            settings.height,
        );
        log::info!(
            "Spawned {} particles in {}x{} (seed {})",
            particles.len(),
            settings.width,
            settings.height,
            seed
        );

        Self {
            seed,
            width: settings.width as f64,
            height: settings.height as f64,
            frame: 0,
            particles,
        }
    }

    /// Build a state around hand-placed particles
    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            seed: 0,
            width,
            height,
            frame: 0,
            particles,
        }
    }
}

/// One particle with randomized position, speed, heading and mass.
///
/// All draws are integers, matching the spawn ranges: position in
/// `[0, width) x [0, height)`, speed in `[20, 120)`, mass in `[20, 320)`.
/// The heading is drawn over the whole non-negative `i32` range and left to
/// the velocity's angle normalization.
pub fn random_particle<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Particle {
    let pos = Point::new(
        rng.random_range(0..width) as f64,
        rng.random_range(0..height) as f64,
    );
    let speed = rng.random_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX) as f64;
    let heading = rng.random_range(0..=i32::MAX) as f64;
    let vel = Velocity::new(speed, heading);
    let mass = rng.random_range(SPAWN_MASS_MIN..SPAWN_MASS_MAX) as f64;

    Particle::new(pos, mass, vel)
}

pub fn spawn_particles<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    width: u32,
    height: u32,
) -> Vec<Particle> {
    (0..count)
        .map(|_| random_particle(rng, width, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_ranges() {
        let settings = Settings {
            particle_count: 200,
            ..Default::default()
        };
        let state = SimState::new(12345, &settings);
        assert_eq!(state.particles.len(), 200);
        assert_eq!(state.frame, 0);

        for p in &state.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert_eq!(p.pos.x.fract(), 0.0);
            assert!(p.vel.speed() >= 20.0 && p.vel.speed() < 120.0);
            assert!(p.vel.angle() >= 0.0 && p.vel.angle() < 360.0);
            assert!(p.mass() >= 20.0 && p.mass() < 320.0);
            // Smallest mass still gives a positive, finite radius
            assert!(p.radius() > 0.0 && p.radius().is_finite());
        }
    }

    #[test]
    fn test_same_seed_same_particles() {
        let settings = Settings::default();
        let a = SimState::new(42, &settings);
        let b = SimState::new(42, &settings);
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.mass(), pb.mass());
        }
    }

    #[test]
    fn test_different_seed_differs() {
        let settings = Settings::default();
        let a = SimState::new(1, &settings);
        let b = SimState::new(2, &settings);
        assert!(
            a.particles
                .iter()
                .zip(&b.particles)
                .any(|(pa, pb)| pa.pos != pb.pos)
        );
    }

    #[test]
    fn test_from_particles() {
        let state = SimState::from_particles(100.0, 50.0, vec![Particle::default()]);
        assert_eq!(state.width, 100.0);
        assert_eq!(state.height, 50.0);
        assert_eq!(state.particles.len(), 1);
    }
}
