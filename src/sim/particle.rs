//! Simulated point-mass

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::velocity::Velocity;
use crate::consts::RADIUS_SCALE;

/// A body in the simulation
///
/// Mass is stored as an absolute value and the visual radius follows it as
/// `ln(mass) * 3`. A zero mass yields a radius of -∞; spawn code never
/// produces one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Point,
    pub vel: Velocity,
    mass: f64,
    radius: f64,
}

/// Axis-aligned square a renderer fills for one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Particle {
    pub fn new(pos: Point, mass: f64, vel: Velocity) -> Self {
        let mut p = Self {
            pos,
            vel,
            mass: 0.0,
            radius: 0.0,
        };
        p.set_mass(mass);
        p
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass.abs();
        self.radius = self.mass.ln() * RADIUS_SCALE;
    }

    /// Manual radius override; decoupled from mass until the next `set_mass`
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.abs();
    }

    /// X of the rim point at `angle` (radians)
    pub fn edge_x(&self, angle: f64) -> f64 {
        self.pos.x + self.radius * angle.cos()
    }

    /// Y of the rim point at `angle` (radians)
    pub fn edge_y(&self, angle: f64) -> f64 {
        self.pos.y + self.radius * angle.sin()
    }

    pub fn footprint(&self) -> Footprint {
        Footprint {
            x: self.pos.x - self.radius,
            y: self.pos.y - self.radius,
            w: self.radius * 2.0,
            h: self.radius * 2.0,
        }
    }

    /// True while position, speed and heading are all finite numbers
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite()
            && self.pos.y.is_finite()
            && self.vel.speed().is_finite()
            && self.vel.angle().is_finite()
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Point::default(), 0.0, Velocity::default())
    }
}
