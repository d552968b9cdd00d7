//! Rotation value kept in both degrees and radians
//!
//! Arithmetic is done in degrees. Every mutation goes through one of the two
//! setters so both representations stay normalized to [0, 360) / [0, 2π).

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{approx_eq, normalize_degrees, normalize_radians};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Angle {
    degree: f64,
    radian: f64,
}

impl Angle {
    pub fn from_degrees(value: f64) -> Self {
        let mut angle = Self {
            degree: 0.0,
            radian: 0.0,
        };
        angle.set_degree(value);
        angle
    }

    pub fn from_radians(value: f64) -> Self {
        let mut angle = Self {
            degree: 0.0,
            radian: 0.0,
        };
        angle.set_radian(value);
        angle
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degree
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radian
    }

    pub fn cos(&self) -> f64 {
        self.radian.cos()
    }

    pub fn sin(&self) -> f64 {
        self.radian.sin()
    }

    pub fn tan(&self) -> f64 {
        self.radian.tan()
    }

    pub fn set_degree(&mut self, value: f64) {
        self.degree = normalize_degrees(value);
        self.radian = normalize_radians(Self::degree_to_radian(self.degree));
    }

    pub fn set_radian(&mut self, value: f64) {
        self.radian = normalize_radians(value);
        self.degree = normalize_degrees(Self::radian_to_degree(self.radian));
    }

    pub fn add_degree(&mut self, value: f64) {
        self.set_degree(self.degree + value);
    }

    pub fn add_radian(&mut self, value: f64) {
        self.set_radian(self.radian + value);
    }

    // Reference angles
    pub fn ref90(&mut self) {
        self.add_degree(90.0);
    }

    pub fn ref180(&mut self) {
        self.add_degree(180.0);
    }

    pub fn ref270(&mut self) {
        self.add_degree(270.0);
    }

    #[inline]
    pub fn degree_to_radian(degrees: f64) -> f64 {
        degrees * (PI / 180.0)
    }

    #[inline]
    pub fn radian_to_degree(radians: f64) -> f64 {
        radians * (180.0 / PI)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::from_degrees(0.0)
    }
}

impl From<f64> for Angle {
    /// Interprets the value as degrees
    fn from(degrees: f64) -> Self {
        Self::from_degrees(degrees)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.degree, other.degree)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.degree.partial_cmp(&other.degree)
    }
}

macro_rules! degree_op {
    ($op:ident, $fn:ident, $assign:ident, $assign_fn:ident, $sym:tt) => {
        impl $assign for Angle {
            fn $assign_fn(&mut self, rhs: Angle) {
                self.set_degree(self.degree $sym rhs.degree);
            }
        }

        impl $op for Angle {
            type Output = Angle;

            fn $fn(mut self, rhs: Angle) -> Angle {
                self.$assign_fn(rhs);
                self
            }
        }
    };
}

degree_op!(Add, add, AddAssign, add_assign, +);
degree_op!(Sub, sub, SubAssign, sub_assign, -);
degree_op!(Mul, mul, MulAssign, mul_assign, *);
degree_op!(Div, div, DivAssign, div_assign, /);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::TAU;

    fn assert_normalized(a: &Angle) {
        assert!(a.degrees() >= 0.0 && a.degrees() < 360.0, "degree {}", a.degrees());
        assert!(a.radians() >= 0.0 && a.radians() < TAU, "radian {}", a.radians());
    }

    #[test]
    fn test_negative_degree_wraps() {
        let a = Angle::from_degrees(-90.0);
        assert!((a.degrees() - 270.0).abs() < 1e-9);
        assert!((a.radians() - 1.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_full_turns_absorbed() {
        let a = Angle::from_degrees(720.0 + 45.0);
        assert!((a.degrees() - 45.0).abs() < 1e-9);
        let b = Angle::from_degrees(-720.0 - 45.0);
        assert!((b.degrees() - 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_radian_updates_degree() {
        let mut a = Angle::default();
        a.set_radian(-PI);
        assert!((a.degrees() - 180.0).abs() < 1e-9);
        a.add_radian(PI / 2.0);
        assert!((a.degrees() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_trig() {
        let a = Angle::from_degrees(90.0);
        assert!(a.cos().abs() < 1e-12);
        assert!((a.sin() - 1.0).abs() < 1e-12);
        let b = Angle::from_degrees(45.0);
        assert!((b.tan() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_angles() {
        let mut a = Angle::from_degrees(300.0);
        a.ref90();
        assert!((a.degrees() - 30.0).abs() < 1e-9);
        a.ref180();
        assert!((a.degrees() - 210.0).abs() < 1e-9);
        a.ref270();
        assert!((a.degrees() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic_renormalizes() {
        let a = Angle::from_degrees(350.0) + Angle::from_degrees(20.0);
        assert!((a.degrees() - 10.0).abs() < 1e-9);
        let b = Angle::from_degrees(10.0) - Angle::from_degrees(20.0);
        assert!((b.degrees() - 350.0).abs() < 1e-9);
        let c = Angle::from_degrees(100.0) * Angle::from_degrees(4.0);
        assert!((c.degrees() - 40.0).abs() < 1e-9);
        let d = Angle::from_degrees(90.0) / Angle::from_degrees(2.0);
        assert!((d.degrees() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_equality_and_ordering() {
        assert_eq!(Angle::from_degrees(10.0), Angle::from_degrees(370.0));
        assert_ne!(Angle::from_degrees(10.0), Angle::from_degrees(10.001));
        assert!(Angle::from_degrees(10.0) < Angle::from_degrees(20.0));
        assert!(Angle::from_degrees(-10.0) > Angle::from_degrees(20.0));
    }

    #[test]
    fn test_nan_passes_through() {
        let a = Angle::from_degrees(f64::NAN);
        assert!(a.degrees().is_nan());
        assert!(a.cos().is_nan());
    }

    proptest! {
        #[test]
        fn prop_setters_keep_both_representations_normalized(
            start in -1e6f64..1e6,
            ops in proptest::collection::vec((0u8..4, -1e5f64..1e5), 0..16),
        ) {
            let mut a = Angle::from_degrees(start);
            assert_normalized(&a);
            for (kind, v) in ops {
                match kind {
                    0 => a.set_degree(v),
                    1 => a.add_degree(v),
                    2 => a.set_radian(v),
                    _ => a.add_radian(v),
                }
                assert_normalized(&a);
                let expected = Angle::degree_to_radian(a.degrees());
                // Both sides sit in [0, 2π); a wrap at the seam shows up as ~2π
                let diff = (a.radians() - expected).abs();
                prop_assert!(diff < 1e-9 || (TAU - diff).abs() < 1e-9);
            }
        }
    }
}
