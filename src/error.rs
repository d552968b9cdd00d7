//! Error type shared by the simulation and its configuration layer
//!
//! Arithmetic anomalies (NaN/∞ from coincident particles or zero mass) are not
//! errors: they propagate through the particle state untouched.

use std::fmt;

#[derive(Debug)]
pub enum SimError {
    /// Coordinate index other than 0 (x) or 1 (y)
    IndexOutOfRange { index: usize },
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Json(serde_json::Error),
    /// Settings parsed but cannot drive a simulation
    InvalidSettings(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::IndexOutOfRange { index } => {
                write!(f, "position {} is out of range (expected 0 or 1)", index)
            }
            SimError::Io(e) => write!(f, "failed to read settings: {}", e),
            SimError::Json(e) => write!(f, "failed to parse settings: {}", e),
            SimError::InvalidSettings(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            SimError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Json(e)
    }
}
