//! Pairwise attraction between two particles
//!
//! The pull on a particle scales with its *own* mass over the first power of
//! the distance: `accel(p1, p2) = G * m1 / d`. This is not Newton's law (which
//! would use the partner's mass over d²), but it is the law the simulation is
//! tuned around, so it is kept as is. Nothing here is cached between frames.

use super::angle::Angle;
use super::particle::Particle;
use crate::consts::G;

/// Attraction magnitude on `p1` toward `p2`
pub fn accel(p1: &Particle, p2: &Particle) -> f64 {
    (G * p1.mass()) / p1.pos.distance(&p2.pos)
}

/// Direction `p1` is pulled in: the bearing from `p1` to `p2`, degrees, not normalized
pub fn angle(p1: &Particle, p2: &Particle) -> f64 {
    p1.pos.direction_to(&p2.pos)
}

/// One side of a pairwise interaction: how hard and which way a particle is pulled
#[derive(Debug, Clone, Copy)]
pub struct Pull {
    pub accel: f64,
    pub bearing: Angle,
}

impl Pull {
    /// Pull on `on` toward `toward`
    pub fn between(on: &Particle, toward: &Particle) -> Self {
        Self {
            accel: accel(on, toward),
            bearing: Angle::from_degrees(angle(on, toward)),
        }
    }

    /// Positional displacement this pull applies in one frame
    pub fn displacement(&self) -> (f64, f64) {
        (
            self.accel * self.bearing.cos(),
            self.accel * self.bearing.sin(),
        )
    }
}

/// Interaction between two entries of a particle collection, addressed by index
///
/// Indices stay valid while the collection is mutated in place during a frame,
/// which references into it would not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gravitation {
    pub first: usize,
    pub second: usize,
}

impl Gravitation {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Pull on the first particle toward the second, from current positions
    pub fn on_first(&self, particles: &[Particle]) -> Pull {
        Pull::between(&particles[self.first], &particles[self.second])
    }

    /// Pull on the second particle toward the first, from current positions
    pub fn on_second(&self, particles: &[Particle]) -> Pull {
        Pull::between(&particles[self.second], &particles[self.first])
    }

    /// Apply both sides of the interaction in place.
    ///
    /// The first particle moves before the second pull is evaluated, so the
    /// second side sees the already-shifted position.
    pub fn apply(&self, particles: &mut [Particle]) {
        let (dx, dy) = self.on_first(particles).displacement();
        particles[self.first].pos.translate(dx, dy);

        let (dx, dy) = self.on_second(particles).displacement();
        particles[self.second].pos.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Point, Velocity};

    fn body(x: f64, y: f64, mass: f64) -> Particle {
        Particle::new(Point::new(x, y), mass, Velocity::default())
    }

    #[test]
    fn test_accel_uses_own_mass_over_distance() {
        let p1 = body(0.0, 0.0, 30.0);
        let p2 = body(3.0, 4.0, 200.0);
        assert!((accel(&p1, &p2) - G * 30.0 / 5.0).abs() < 1e-24);
        assert!((accel(&p2, &p1) - G * 200.0 / 5.0).abs() < 1e-24);
        assert!(accel(&p1, &p2) < accel(&p2, &p1));
    }

    #[test]
    fn test_equal_masses_pull_equally() {
        let p1 = body(0.0, 0.0, 50.0);
        let p2 = body(10.0, 0.0, 50.0);
        assert_eq!(accel(&p1, &p2), accel(&p2, &p1));
    }

    #[test]
    fn test_angle_is_bearing() {
        let p1 = body(0.0, 0.0, 30.0);
        let p2 = body(1.0, 1.0, 30.0);
        assert!((angle(&p1, &p2) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_particles_go_nan() {
        let p1 = body(5.0, 5.0, 30.0);
        let p2 = body(5.0, 5.0, 30.0);
        assert!(accel(&p1, &p2).is_infinite());
        let (dx, dy) = Pull::between(&p1, &p2).displacement();
        assert!(dx.is_nan() && dy.is_nan());
    }

    #[test]
    fn test_displacement_components() {
        let pull = Pull {
            accel: 2.0,
            bearing: Angle::from_degrees(90.0),
        };
        let (dx, dy) = pull.displacement();
        assert!(dx.abs() < 1e-12);
        assert!((dy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_moves_both_in_sequence() {
        let mut particles = vec![body(0.0, 0.0, 100.0), body(1.0, 1.0, 300.0)];
        let g = Gravitation::new(0, 1);

        let first = g.on_first(&particles);
        let (dx, dy) = first.displacement();
        let mut expected_first = particles[0].clone();
        expected_first.pos.translate(dx, dy);

        let (sx, sy) = Pull::between(&particles[1], &expected_first).displacement();

        g.apply(&mut particles);
        assert_eq!(particles[0].pos, expected_first.pos);
        assert_eq!(particles[1].pos, Point::new(1.0 + sx, 1.0 + sy));
    }
}
