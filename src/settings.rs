//! Simulation settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.
//! The gravitational constant is deliberately not a setting.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SimError;
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PARTICLE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window width in pixels (right reflection boundary)
    pub width: u32,
    /// Window height in pixels (bottom reflection boundary)
    pub height: u32,
    /// Number of particles spawned at startup
    pub particle_count: usize,
    /// Fixed RNG seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Log a frame summary every N frames (0 disables)
    pub log_every: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            particle_count: PARTICLE_COUNT,
            seed: None,
            log_every: 60,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings that leave the spawn ranges empty
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidSettings(format!(
                "window must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!((s.width, s.height), (800, 600));
        assert_eq!(s.particle_count, 25);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json_str(r#"{ "particle_count": 4, "seed": 7 }"#).unwrap();
        assert_eq!(s.particle_count, 4);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.width, 800);
        assert_eq!(s.log_every, 60);
    }

    #[test]
    fn test_invalid_json() {
        let err = Settings::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = Settings::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidSettings(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_round_trip_through_json() {
        let s = Settings {
            seed: Some(99),
            ..Default::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json_str(&json).unwrap(), s);
    }
}
