//! Cycle state of a single dimension

use crate::constellation::registry::ConstellationRegistry;
use crate::core::astronomy::NO_RECORDED_DAY;
use crate::schedule::day_schedule::DaySkySchedule;
use crate::schedule::seed::SeedSource;

/// Seed, last observed day and schedule of one dimension
#[derive(Debug, Clone)]
pub struct WorldCycleState {
    source: SeedSource,
    last_recorded_day: i64,
    schedule: DaySkySchedule,
    /// Number of full rebuilds performed
    generation: u64,
}

impl WorldCycleState {
    /// Create the state and run the initial rebuild
    pub fn new(seed: u64, registry: &ConstellationRegistry) -> Self {
        let mut state = Self {
            source: SeedSource::new(seed),
            last_recorded_day: NO_RECORDED_DAY,
            schedule: DaySkySchedule::new(),
            generation: 0,
        };
        state.rebuild(registry);
        state
    }

    /// Advance to `day`.
    ///
    /// Forward movement (by any number of days) only reselects the active
    /// slot. Backward movement rebuilds the whole schedule first.
    pub fn tick(&mut self, day: i64, registry: &ConstellationRegistry) {
        if day == self.last_recorded_day {
            return;
        }

        if day < self.last_recorded_day {
            tracing::debug!(
                "Day moved backwards from {} to {}, rebuilding",
                self.last_recorded_day,
                day
            );
            self.rebuild(registry);
        }

        self.schedule.recalc(day);
        self.last_recorded_day = day;
    }

    /// Rebuild now, keeping the active day if one has been observed
    pub fn force_recompute(&mut self, registry: &ConstellationRegistry) {
        self.rebuild(registry);
        if self.last_recorded_day != NO_RECORDED_DAY {
            self.schedule.recalc(self.last_recorded_day);
        }
    }

    fn rebuild(&mut self, registry: &ConstellationRegistry) {
        self.schedule.rebuild_with(&mut self.source, registry);
        self.generation += 1;
        tracing::debug!(
            seed = self.source.seed(),
            constellations = registry.len(),
            generation = self.generation,
            "Rebuilt constellation schedule"
        );
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn last_recorded_day(&self) -> i64 {
        self.last_recorded_day
    }

    pub fn schedule(&self) -> &DaySkySchedule {
        &self.schedule
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
