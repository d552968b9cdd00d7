//! Polar velocity: a speed and a heading
//!
//! The heading is an [`Angle`], so it is always in [0, 360). Speed is only
//! forced non-negative by `set_speed`/`add_speed`; `Velocity::new` stores the
//! raw value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::angle::Angle;
use crate::approx_eq;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity {
    speed: f64,
    angle: Angle,
}

impl Velocity {
    /// Raw constructor: `speed` is stored as given, even if negative
    pub fn new(speed: f64, angle_degrees: f64) -> Self {
        Self {
            speed,
            angle: Angle::from_degrees(angle_degrees),
        }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Heading in degrees, [0, 360)
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle.degrees()
    }

    pub fn heading(&self) -> &Angle {
        &self.angle
    }

    pub fn x_component(&self) -> f64 {
        self.speed * self.angle.cos()
    }

    pub fn y_component(&self) -> f64 {
        self.speed * self.angle.sin()
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
        self.clean_speed();
    }

    pub fn add_speed(&mut self, speed: f64) {
        self.speed += speed;
        self.clean_speed();
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.angle.set_degree(degrees);
    }

    pub fn add_angle(&mut self, degrees: f64) {
        self.angle.add_degree(degrees);
    }

    pub fn reset_speed(&mut self) {
        self.speed = 0.0;
    }

    pub fn reset_angle(&mut self) {
        self.angle = Angle::default();
    }

    pub fn reset(&mut self) {
        self.reset_speed();
        self.reset_angle();
    }

    pub fn is_same_speed(&self, speed: f64) -> bool {
        approx_eq(self.speed, speed)
    }

    pub fn is_same_angle(&self, degrees: f64) -> bool {
        approx_eq(self.angle.degrees(), degrees)
    }

    /// A negative speed becomes the same motion pointing the other way
    fn clean_speed(&mut self) {
        if self.speed < 0.0 {
            self.speed = -self.speed;
            self.angle.add_degree(180.0);
        }
    }
}

impl PartialEq for Velocity {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_speed(other.speed) && self.is_same_angle(other.angle.degrees())
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.speed, self.angle.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constructor_keeps_raw_speed() {
        let v = Velocity::new(-5.0, 30.0);
        assert_eq!(v.speed(), -5.0);
        assert!((v.angle() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_constructor_normalizes_angle() {
        let v = Velocity::new(1.0, -90.0);
        assert!((v.angle() - 270.0).abs() < 1e-9);
        let v = Velocity::new(1.0, 2_147_483_647.0);
        assert!(v.angle() >= 0.0 && v.angle() < 360.0);
    }

    #[test]
    fn test_negative_speed_flips_heading() {
        let mut v = Velocity::new(10.0, 30.0);
        v.set_speed(-4.0);
        assert_eq!(v.speed(), 4.0);
        assert!((v.angle() - 210.0).abs() < 1e-9);

        v.add_speed(-10.0);
        assert_eq!(v.speed(), 6.0);
        assert!((v.angle() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_components() {
        let v = Velocity::new(2.0, 90.0);
        assert!(v.x_component().abs() < 1e-12);
        assert!((v.y_component() - 2.0).abs() < 1e-12);

        let v = Velocity::new(10.0, 180.0);
        assert!((v.x_component() + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_setters_normalize() {
        let mut v = Velocity::new(1.0, 10.0);
        v.set_angle(180.0 - 10.0 - 360.0);
        assert!((v.angle() - 170.0).abs() < 1e-9);
        v.add_angle(-200.0);
        assert!((v.angle() - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_and_equality() {
        let mut v = Velocity::new(3.0, 45.0);
        assert_eq!(v, Velocity::new(3.0, 405.0));
        assert_ne!(v, Velocity::new(3.0, 46.0));
        v.reset();
        assert_eq!(v, Velocity::default());
        assert_eq!(v.to_string(), "(0, 0)");
    }

    proptest! {
        #[test]
        fn prop_speed_non_negative_after_setter(
            initial in -500.0f64..500.0,
            angle in -1e4f64..1e4,
            deltas in proptest::collection::vec(-500.0f64..500.0, 1..12),
        ) {
            let mut v = Velocity::new(initial, angle);
            v.set_speed(initial);
            prop_assert!(v.speed() >= 0.0);
            for d in deltas {
                v.add_speed(d);
                prop_assert!(v.speed() >= 0.0);
                prop_assert!(v.angle() >= 0.0 && v.angle() < 360.0);
            }
        }
    }
}
