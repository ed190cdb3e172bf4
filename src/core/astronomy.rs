//! Sky cycle constants
//!
//! Fixed shape of the constellation cycle and the default length of a day.
//! These are design constants; only the day length is overridable through
//! [`SkyConfig`](crate::core::config::SkyConfig).

// ============================================================================
// Constants
// ============================================================================

/// Number of slots (days) in one constellation cycle
pub const CYCLE_LENGTH: u8 = 8;

/// Number of contiguous slots a weak or major constellation occupies
pub const RUN_LENGTH: u8 = 5;

/// Slot draws attempted before the last draw is accepted as-is
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 5;

/// Upper bound on the free slots a run must cover to be accepted
pub const MIN_FREE_IN_RUN: usize = 3;

/// Constellations shown for a single day; extra entries keep their
/// distribution but are not listed as visible
pub const MAX_VISIBLE_CONSTELLATIONS: usize = 10;

/// Number of simulation ticks per day
pub const DAY_LENGTH: u64 = 24000;

/// Day index before any tick has been observed
pub const NO_RECORDED_DAY: i64 = -1;

/// Half-duration of an eclipse, as a fraction of the day length
pub const ECLIPSE_HALF_DURATION_DIVISOR: u64 = 10;

/// Width of a dusk or dawn transition, as a fraction of the day length
pub const TWILIGHT_DIVISOR: f64 = 7.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(CYCLE_LENGTH, 8);
        assert_eq!(RUN_LENGTH, 5);
        assert_eq!(MAX_PLACEMENT_ATTEMPTS, 5);
        assert_eq!(MIN_FREE_IN_RUN, 3);
        assert_eq!(MAX_VISIBLE_CONSTELLATIONS, 10);
        assert_eq!(DAY_LENGTH, 24000);
        assert_eq!(NO_RECORDED_DAY, -1);
    }

    #[test]
    fn test_run_fits_inside_cycle() {
        assert!(RUN_LENGTH < CYCLE_LENGTH);
        assert!(MIN_FREE_IN_RUN <= RUN_LENGTH as usize);
    }
}
