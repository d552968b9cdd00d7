//! 2D coordinate owned by a particle

use std::fmt;
use std::ops::{Index, IndexMut};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::SimError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.y = value;
    }

    pub fn set_pos(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Shift the point in place
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing from this point to `other`, in degrees.
    ///
    /// Quadrant selection on `rise = other.y - y`, `run = other.x - x`:
    ///
    /// | rise | run | result      |
    /// |------|-----|-------------|
    /// | > 0  | > 0 | angle       |
    /// | > 0  | ≤ 0 | 180 + angle |
    /// | ≤ 0  | < 0 | 360 + angle |
    /// | ≤ 0  | ≥ 0 | 270 - angle |
    ///
    /// where `angle = atan(rise / run)` in degrees. The result is not
    /// normalized. Coincident points give NaN.
    pub fn direction_to(&self, other: &Point) -> f64 {
        let run = other.x - self.x;
        let rise = other.y - self.y;
        let angle = (rise / run).atan().to_degrees();

        if rise > 0.0 {
            if run > 0.0 { angle } else { 180.0 + angle }
        } else if run < 0.0 {
            360.0 + angle
        } else {
            270.0 - angle
        }
    }

    /// Coordinate by index: 0 is x, 1 is y
    pub fn get(&self, index: usize) -> Result<f64, SimError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(SimError::IndexOutOfRange { index }),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64, SimError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(SimError::IndexOutOfRange { index }),
        }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Position {} is out of range", index),
        }
    }
}

impl IndexMut<usize> for Point {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Position {} is out of range", index),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
