//! Calendar for world-time bookkeeping
//!
//! Converts an absolute world time (in ticks) into the day index used by the
//! constellation cycle and the tick offset inside the current day used by the
//! day/night curve.

use serde::{Deserialize, Serialize};

use crate::core::astronomy::DAY_LENGTH;

/// Calendar tracks world time with day granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    world_time: u64,
    day_length: u64,
}

impl Calendar {
    pub fn new(day_length: u64) -> Self {
        Self {
            world_time: 0,
            day_length: day_length.max(1),
        }
    }

    pub fn at(world_time: u64, day_length: u64) -> Self {
        Self {
            world_time,
            day_length: day_length.max(1),
        }
    }

    pub fn advance(&mut self, ticks: u64) {
        self.world_time = self.world_time.saturating_add(ticks);
    }

    /// Move to the same time of day on the next day
    pub fn advance_day(&mut self) {
        self.advance(self.day_length);
    }

    pub fn world_time(&self) -> u64 {
        self.world_time
    }

    pub fn set_world_time(&mut self, world_time: u64) {
        self.world_time = world_time;
    }

    pub fn day_length(&self) -> u64 {
        self.day_length
    }

    /// Absolute day index (elapsed ticks / ticks per day)
    pub fn day_index(&self) -> i64 {
        (self.world_time / self.day_length) as i64
    }

    /// Ticks elapsed since the start of the current day
    pub fn day_time(&self) -> u64 {
        self.world_time % self.day_length
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DAY_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_day_index() {
        let mut cal = Calendar::new(1000);
        assert_eq!(cal.day_index(), 0);
        assert_eq!(cal.day_time(), 0);

        cal.advance(999);
        assert_eq!(cal.day_index(), 0);
        assert_eq!(cal.day_time(), 999);

        cal.advance(1);
        assert_eq!(cal.day_index(), 1);
        assert_eq!(cal.day_time(), 0);
    }

    #[test]
    fn test_advance_day_keeps_time_of_day() {
        let mut cal = Calendar::at(24000 * 3 + 13000, 24000);
        assert_eq!(cal.day_index(), 3);
        cal.advance_day();
        assert_eq!(cal.day_index(), 4);
        assert_eq!(cal.day_time(), 13000);
    }

    #[test]
    fn test_default_uses_standard_day_length() {
        let cal = Calendar::default();
        assert_eq!(cal.day_length(), DAY_LENGTH);
    }

    #[test]
    fn test_zero_day_length_is_clamped() {
        let cal = Calendar::at(500, 0);
        assert_eq!(cal.day_length(), 1);
        assert_eq!(cal.day_index(), 500);
    }
}
