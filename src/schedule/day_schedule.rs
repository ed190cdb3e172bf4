//! Per-dimension constellation schedule
//!
//! Holds, for each of the 8 cycle slots, the ordered list of constellations
//! shown on that slot and their distribution factors, plus the view for the
//! currently active day.

use ahash::AHashMap;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

use crate::constellation::registry::ConstellationRegistry;
use crate::core::astronomy::{CYCLE_LENGTH, MAX_VISIBLE_CONSTELLATIONS};
use crate::core::types::{ConstellationId, CycleSlot};
use crate::schedule::allocator::{allocate_run, SlotOccupancy};
use crate::schedule::curve::curve;
use crate::schedule::minor;
use crate::schedule::seed::SeedSource;

const SLOTS: usize = CYCLE_LENGTH as usize;

/// Slot tables for one dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySkySchedule {
    /// Constellations per slot, in insertion order
    slot_constellations: [Vec<ConstellationId>; SLOTS],
    /// Distribution factor per slot and constellation
    slot_distribution: [AHashMap<ConstellationId, f32>; SLOTS],
    active_day: CycleSlot,
    active_constellations: Vec<ConstellationId>,
    active_distribution: AHashMap<ConstellationId, f32>,
}

impl DaySkySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full recompute from `seed` and a registry snapshot
    pub fn rebuild(&mut self, seed: u64, registry: &ConstellationRegistry) {
        let mut source = SeedSource::new(seed);
        self.rebuild_with(&mut source, registry);
    }

    /// Full recompute drawing from `source`, which is rewound first.
    ///
    /// Draw order: shuffle of weak (majors included), shuffle of minors,
    /// then one slot draw sequence per weak constellation in processing
    /// order. Changing this order changes every existing world's sky.
    pub fn rebuild_with(&mut self, source: &mut SeedSource, registry: &ConstellationRegistry) {
        source.reset();
        self.clear();

        let mut weak = registry.weak();
        weak.shuffle(source);

        // Pushing each to the front reverses the shuffled order
        let mut order: VecDeque<ConstellationId> = VecDeque::with_capacity(registry.len());
        for id in weak {
            order.push_front(id);
        }

        let mut minors = registry.minor();
        minors.shuffle(source);
        order.extend(minors);

        let mut occupancy = SlotOccupancy::new();
        for id in order {
            let Some(constellation) = registry.get(id) else {
                continue;
            };

            if constellation.special_showup {
                tracing::trace!("Skipping special constellation {}", constellation.name);
                continue;
            }

            if constellation.is_minor() {
                let phases = constellation.phases_for(source.seed());
                minor::place(id, &phases, self);
                continue;
            }

            let start = allocate_run(&occupancy, source);
            if occupancy.occupy_run(start) {
                tracing::trace!("All cycle slots claimed, releasing occupancy");
            }
            tracing::trace!("Placed {} at slot {}", constellation.name, start);

            for slot in start.run() {
                self.slot_constellations[slot.index()].push(id);
            }

            for slot in CycleSlot::all() {
                let factor = if constellation.is_major() {
                    0.0
                } else {
                    curve(start, slot)
                };
                self.slot_distribution[slot.index()].insert(id, factor);
            }
        }
    }

    /// Select the slot for `day` as the active view
    pub fn recalc(&mut self, day: i64) {
        let slot = CycleSlot::from_day(day);
        self.active_day = slot;
        self.active_constellations = self.slot_constellations[slot.index()]
            .iter()
            .take(MAX_VISIBLE_CONSTELLATIONS)
            .copied()
            .collect();
        // Not truncated: hidden constellations keep their strength
        self.active_distribution = self.slot_distribution[slot.index()].clone();
    }

    pub(crate) fn insert(&mut self, slot: CycleSlot, id: ConstellationId, distribution: f32) {
        self.slot_constellations[slot.index()].push(id);
        self.slot_distribution[slot.index()].insert(id, distribution);
    }

    fn clear(&mut self) {
        for list in self.slot_constellations.iter_mut() {
            list.clear();
        }
        for map in self.slot_distribution.iter_mut() {
            map.clear();
        }
        self.active_constellations.clear();
        self.active_distribution.clear();
    }

    pub fn slot_constellations(&self, slot: CycleSlot) -> &[ConstellationId] {
        &self.slot_constellations[slot.index()]
    }

    pub fn slot_distribution(&self, slot: CycleSlot) -> &AHashMap<ConstellationId, f32> {
        &self.slot_distribution[slot.index()]
    }

    /// Slots a constellation is shown on
    pub fn slots_of(&self, id: ConstellationId) -> Vec<CycleSlot> {
        CycleSlot::all()
            .filter(|slot| self.slot_constellations[slot.index()].contains(&id))
            .collect()
    }

    pub fn active_day(&self) -> CycleSlot {
        self.active_day
    }

    pub fn active_constellations(&self) -> &[ConstellationId] {
        &self.active_constellations
    }

    pub fn active_distribution(&self) -> &AHashMap<ConstellationId, f32> {
        &self.active_distribution
    }

    pub fn is_active(&self, id: ConstellationId) -> bool {
        self.active_constellations.contains(&id)
    }

    /// Distribution on the active day, 0 when unscheduled
    pub fn distribution(&self, id: ConstellationId) -> f32 {
        self.active_distribution.get(&id).copied().unwrap_or(0.0)
    }
}
