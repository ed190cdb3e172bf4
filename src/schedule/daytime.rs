//! Day/night strength curve
//!
//! The factor is 0 through the first half of the day, ramps linearly to 1
//! over a dusk window of `day_length / 7`, stays at 1 through deep night and
//! ramps back to 0 over a dawn window of the same width ending at the day
//! boundary.

use serde::{Deserialize, Serialize};

use crate::core::astronomy::TWILIGHT_DIVISOR;
use crate::core::config::SkyConfig;

/// Night strength for `day_time` ticks into a day of `day_length` ticks
pub fn daytime_distribution(day_time: f64, day_length: f64) -> f32 {
    let half = day_length / 2.0;
    let part = day_length / TWILIGHT_DIVISOR;

    if day_time < half {
        return 0.0;
    }
    if day_time < half + part {
        // Dusk
        return ((day_time - (half + part)) / part + 1.0).clamp(0.0, 1.0) as f32;
    }
    if day_time > day_length - part {
        // Dawn
        return (1.0 - (day_time - (day_length - part)) / part).clamp(0.0, 1.0) as f32;
    }
    1.0
}

/// Coarse reading of the daytime factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    Day,
    /// Between the day and night thresholds
    Twilight,
    Night,
}

impl DayPhase {
    pub fn from_factor(factor: f32, config: &SkyConfig) -> Self {
        if factor >= config.night_threshold {
            DayPhase::Night
        } else if factor <= config.day_threshold {
            DayPhase::Day
        } else {
            DayPhase::Twilight
        }
    }

    pub fn is_night(&self) -> bool {
        matches!(self, DayPhase::Night)
    }

    pub fn is_day(&self) -> bool {
        matches!(self, DayPhase::Day)
    }
}
