//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::astronomy::{CYCLE_LENGTH, RUN_LENGTH};

/// Identifier of a dimension (one independently ticked world)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DimensionId(pub i32);

impl DimensionId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DimensionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dim:{}", self.0)
    }
}

/// Opaque handle to a registered constellation
///
/// Assigned by the constellation registry in registration order. The tier of
/// the constellation is resolved through the registry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConstellationId(pub u32);

impl ConstellationId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Position within the repeating 8-day constellation cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CycleSlot(u8);

impl CycleSlot {
    /// Create a slot, wrapping values outside the cycle
    pub fn new(value: u8) -> Self {
        Self(value % CYCLE_LENGTH)
    }

    /// Slot a given absolute day falls on. Negative days wrap backwards,
    /// so day -1 is slot 7.
    pub fn from_day(day: i64) -> Self {
        Self(day.rem_euclid(CYCLE_LENGTH as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Slot `steps` positions after this one, modulo the cycle
    pub fn offset(&self, steps: u8) -> Self {
        Self::new(((self.0 as u16 + steps as u16) % CYCLE_LENGTH as u16) as u8)
    }

    /// Forward distance from `start` to this slot, always in `[0, 8)`
    pub fn distance_from(&self, start: CycleSlot) -> u8 {
        if self.0 >= start.0 {
            self.0 - start.0
        } else {
            self.0 + CYCLE_LENGTH - start.0
        }
    }

    /// The contiguous run of slots beginning here
    pub fn run(self) -> impl Iterator<Item = CycleSlot> {
        (0..RUN_LENGTH).map(move |step| self.offset(step))
    }

    /// All slots of the cycle in order
    pub fn all() -> impl Iterator<Item = CycleSlot> {
        (0..CYCLE_LENGTH).map(CycleSlot)
    }
}

impl std::fmt::Display for CycleSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_day_wraps_negative_days() {
        assert_eq!(CycleSlot::from_day(-1), CycleSlot::new(7));
        assert_eq!(CycleSlot::from_day(7), CycleSlot::new(7));
        assert_eq!(CycleSlot::from_day(-8), CycleSlot::new(0));
        assert_eq!(CycleSlot::from_day(-9), CycleSlot::new(7));
        assert_eq!(CycleSlot::from_day(8), CycleSlot::new(0));
        assert_eq!(CycleSlot::from_day(i64::MIN).value(), 0);
    }

    #[test]
    fn test_slot_offset_wraps() {
        assert_eq!(CycleSlot::new(6).offset(3), CycleSlot::new(1));
        assert_eq!(CycleSlot::new(0).offset(4), CycleSlot::new(4));
        assert_eq!(CycleSlot::new(9), CycleSlot::new(1));
    }

    #[test]
    fn test_distance_from() {
        let start = CycleSlot::new(6);
        assert_eq!(CycleSlot::new(6).distance_from(start), 0);
        assert_eq!(CycleSlot::new(7).distance_from(start), 1);
        assert_eq!(CycleSlot::new(0).distance_from(start), 2);
        assert_eq!(CycleSlot::new(2).distance_from(start), 4);
        assert_eq!(CycleSlot::new(5).distance_from(start), 7);
    }

    #[test]
    fn test_run_covers_five_contiguous_slots() {
        let run: Vec<u8> = CycleSlot::new(5).run().map(|s| s.value()).collect();
        assert_eq!(run, vec![5, 6, 7, 0, 1]);
    }

    #[test]
    fn test_all_slots() {
        let all: Vec<u8> = CycleSlot::all().map(|s| s.value()).collect();
        assert_eq!(all, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
