//! Moon-phase placement for minor constellations

use crate::constellation::definition::PhaseSet;
use crate::core::types::ConstellationId;
use crate::schedule::day_schedule::DaySkySchedule;

/// Place a minor constellation on every slot of its phase set, with
/// distribution 0. Minors never compete for slots.
pub fn place(constellation: ConstellationId, phases: &PhaseSet, schedule: &mut DaySkySchedule) {
    for slot in phases.iter() {
        schedule.insert(slot, constellation, 0.0);
    }
}
