//! Per-dimension sky state
//!
//! `SkyRegistry` owns one [`WorldCycleState`] per dimension. States are
//! created lazily on first tick and dropped when the dimension unloads.
//! Read accessors never fail: a dimension without state reports nothing
//! visible, zero distribution and an ambient daytime factor of 0.5.

use ahash::AHashMap;
use std::sync::Arc;

use crate::constellation::registry::ConstellationRegistry;
use crate::core::calendar::Calendar;
use crate::core::config::SkyConfig;
use crate::core::types::{ConstellationId, DimensionId};
use crate::schedule::daytime::{daytime_distribution, DayPhase};
use crate::schedule::world_state::WorldCycleState;
use crate::sky::environment::SkyEnvironment;

/// Daytime factor reported for dimensions without state
pub const AMBIENT_DAYTIME_FACTOR: f32 = 0.5;

/// Sky schedules of every loaded dimension
#[derive(Debug, Clone)]
pub struct SkyRegistry {
    constellations: Arc<ConstellationRegistry>,
    config: SkyConfig,
    states: AHashMap<DimensionId, WorldCycleState>,
}

impl SkyRegistry {
    pub fn new(constellations: Arc<ConstellationRegistry>, config: SkyConfig) -> Self {
        Self {
            constellations,
            config,
            states: AHashMap::new(),
        }
    }

    pub fn with_defaults(constellations: ConstellationRegistry) -> Self {
        Self::new(Arc::new(constellations), SkyConfig::default())
    }

    pub fn constellations(&self) -> &ConstellationRegistry {
        &self.constellations
    }

    pub fn config(&self) -> &SkyConfig {
        &self.config
    }

    /// Advance `dimension` to `day`, creating its state from `seed` on
    /// first use. The seed is ignored once the state exists.
    pub fn tick(&mut self, dimension: DimensionId, seed: u64, day: i64) {
        let constellations = &self.constellations;
        let state = self.states.entry(dimension).or_insert_with(|| {
            tracing::info!("Creating sky state for {} (seed {})", dimension, seed);
            WorldCycleState::new(seed, constellations)
        });
        state.tick(day, constellations);
    }

    /// Tick `dimension` from the host environment.
    ///
    /// Dimensions without a sky or with the daylight cycle disabled are
    /// left untouched. Returns whether a tick happened.
    pub fn update(&mut self, env: &impl SkyEnvironment, dimension: DimensionId) -> bool {
        if !env.has_sky(dimension) || !env.daylight_cycle_enabled(dimension) {
            return false;
        }

        let calendar = Calendar::at(env.world_time(dimension), self.config.day_length);
        self.tick(dimension, env.seed(dimension), calendar.day_index());
        true
    }

    /// Discard the state; the next tick rebuilds from scratch
    pub fn force_reset(&mut self, dimension: DimensionId) {
        if self.states.remove(&dimension).is_some() {
            tracing::info!("Reset sky state for {}", dimension);
        }
    }

    /// Rebuild the schedule of an existing state in place
    pub fn force_recompute(&mut self, dimension: DimensionId) -> bool {
        match self.states.get_mut(&dimension) {
            Some(state) => {
                state.force_recompute(&self.constellations);
                true
            }
            None => false,
        }
    }

    /// Release the state of an unloaded dimension
    pub fn drop_on_unload(&mut self, dimension: DimensionId) {
        if self.states.remove(&dimension).is_some() {
            tracing::info!("Dropped sky state for unloaded {}", dimension);
        }
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn state(&self, dimension: DimensionId) -> Option<&WorldCycleState> {
        self.states.get(&dimension)
    }

    pub fn loaded_dimensions(&self) -> Vec<DimensionId> {
        let mut dims: Vec<DimensionId> = self.states.keys().copied().collect();
        dims.sort();
        dims
    }

    /// Constellations visible today, at most 10, in schedule order
    pub fn visible(&self, dimension: DimensionId) -> Vec<ConstellationId> {
        self.state(dimension)
            .map(|s| s.schedule().active_constellations().to_vec())
            .unwrap_or_default()
    }

    pub fn is_visible(&self, dimension: DimensionId, id: ConstellationId) -> bool {
        self.state(dimension)
            .map_or(false, |s| s.schedule().is_active(id))
    }

    pub fn distribution(&self, dimension: DimensionId, id: ConstellationId) -> f32 {
        self.state(dimension)
            .map_or(0.0, |s| s.schedule().distribution(id))
    }

    /// Night strength at `world_time`
    pub fn daytime_distribution(&self, dimension: DimensionId, world_time: u64) -> f32 {
        if self.state(dimension).is_none() {
            return AMBIENT_DAYTIME_FACTOR;
        }
        let calendar = Calendar::at(world_time, self.config.day_length);
        daytime_distribution(calendar.day_time() as f64, calendar.day_length() as f64)
    }

    pub fn day_phase(&self, dimension: DimensionId, world_time: u64) -> DayPhase {
        DayPhase::from_factor(self.daytime_distribution(dimension, world_time), &self.config)
    }

    pub fn is_night(&self, dimension: DimensionId, world_time: u64) -> bool {
        self.day_phase(dimension, world_time).is_night()
    }

    pub fn is_day(&self, dimension: DimensionId, world_time: u64) -> bool {
        self.day_phase(dimension, world_time).is_day()
    }

    pub fn solar_eclipse_half_duration(&self) -> u64 {
        self.config.solar_eclipse_half_duration()
    }

    pub fn lunar_eclipse_half_duration(&self) -> u64 {
        self.config.lunar_eclipse_half_duration()
    }
}
