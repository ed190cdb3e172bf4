//! Sky configuration with documented constants
//!
//! The cycle shape (8 slots, 5-slot runs) is fixed in
//! [`astronomy`](crate::core::astronomy). What a host may tune lives here.

use serde::Deserialize;
use std::path::Path;

use crate::core::astronomy::{DAY_LENGTH, ECLIPSE_HALF_DURATION_DIVISOR};
use crate::core::error::{Result, SkyError};

/// Configuration for the sky scheduler
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// Length of one in-game day in ticks
    ///
    /// Drives the day index handed to the scheduler and the width of the
    /// dusk/dawn ramps (`day_length / 7`). Eclipse half-durations are
    /// `day_length / 10`.
    pub day_length: u64,

    /// Daytime factor at or above which it is night
    ///
    /// The factor is 0 during the day and 1 in deep night. At 0.6 night
    /// starts a little past the middle of the dusk ramp.
    pub night_threshold: f32,

    /// Daytime factor at or below which it is day
    ///
    /// Values strictly between the two thresholds are twilight, neither
    /// day nor night.
    pub day_threshold: f32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            day_length: DAY_LENGTH,
            night_threshold: 0.6,
            day_threshold: 0.4,
        }
    }
}

impl SkyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, filling missing fields with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SkyConfig = toml::from_str(content)?;
        config.validate().map_err(SkyError::InvalidConfig)?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        // Needs room for the twilight ramps and eclipse windows
        if self.day_length < 10 {
            return Err(format!(
                "day_length ({}) must be at least 10 ticks",
                self.day_length
            ));
        }

        for (name, value) in [
            ("night_threshold", self.night_threshold),
            ("day_threshold", self.day_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} ({}) must lie in [0, 1]", name, value));
            }
        }

        if self.day_threshold >= self.night_threshold {
            return Err(format!(
                "day_threshold ({}) should be < night_threshold ({})",
                self.day_threshold, self.night_threshold
            ));
        }

        Ok(())
    }

    /// Half-duration of a solar eclipse in ticks
    pub fn solar_eclipse_half_duration(&self) -> u64 {
        self.day_length / ECLIPSE_HALF_DURATION_DIVISOR
    }

    /// Half-duration of a lunar eclipse in ticks
    pub fn lunar_eclipse_half_duration(&self) -> u64 {
        self.day_length / ECLIPSE_HALF_DURATION_DIVISOR
    }
}
