//! Distribution curve for weak constellations
//!
//! Strength rises from 0.75 at the first slot of a run to 1.0 at its middle
//! and falls back to 0.75 at its last slot.

use std::f64::consts::PI;

use crate::core::types::CycleSlot;

/// Distribution factor of a weak constellation whose run starts at `start`,
/// evaluated at `slot`.
pub fn curve(start: CycleSlot, slot: CycleSlot) -> f32 {
    let part = slot.distance_from(start) as f64 / 4.0;
    ((part * PI).sin() * 0.25 + 0.75) as f32
}
