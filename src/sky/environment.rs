//! Host environment seam
//!
//! The scheduler does not own world time or world seeds. A host implements
//! [`SkyEnvironment`] to hand them over per dimension.

use ahash::AHashMap;

use crate::core::types::DimensionId;

/// What the scheduler needs to know about a dimension
pub trait SkyEnvironment {
    /// 64-bit seed the dimension's schedule is derived from
    fn seed(&self, dimension: DimensionId) -> u64;

    /// Whether the dimension has a sky at all
    fn has_sky(&self, dimension: DimensionId) -> bool;

    /// Whether time of day advances in the dimension
    fn daylight_cycle_enabled(&self, dimension: DimensionId) -> bool;

    /// Absolute world time in ticks
    fn world_time(&self, dimension: DimensionId) -> u64;
}

/// Sky-related facts about one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionInfo {
    pub seed: u64,
    pub has_sky: bool,
    pub daylight_cycle: bool,
    pub world_time: u64,
}

impl DimensionInfo {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            has_sky: true,
            daylight_cycle: true,
            world_time: 0,
        }
    }
}

/// Plain-data environment, used by the CLI and tests
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    dimensions: AHashMap<DimensionId, DimensionInfo>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(mut self, dimension: DimensionId, info: DimensionInfo) -> Self {
        self.dimensions.insert(dimension, info);
        self
    }

    pub fn insert(&mut self, dimension: DimensionId, info: DimensionInfo) {
        self.dimensions.insert(dimension, info);
    }

    pub fn get_mut(&mut self, dimension: DimensionId) -> Option<&mut DimensionInfo> {
        self.dimensions.get_mut(&dimension)
    }

    pub fn set_world_time(&mut self, dimension: DimensionId, world_time: u64) {
        if let Some(info) = self.dimensions.get_mut(&dimension) {
            info.world_time = world_time;
        }
    }
}

// Unknown dimensions read as skyless, so nothing gets scheduled for them
impl SkyEnvironment for StaticEnvironment {
    fn seed(&self, dimension: DimensionId) -> u64 {
        self.dimensions.get(&dimension).map_or(0, |d| d.seed)
    }

    fn has_sky(&self, dimension: DimensionId) -> bool {
        self.dimensions.get(&dimension).map_or(false, |d| d.has_sky)
    }

    fn daylight_cycle_enabled(&self, dimension: DimensionId) -> bool {
        self.dimensions
            .get(&dimension)
            .map_or(false, |d| d.daylight_cycle)
    }

    fn world_time(&self, dimension: DimensionId) -> u64 {
        self.dimensions.get(&dimension).map_or(0, |d| d.world_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dimension_has_no_sky() {
        let env = StaticEnvironment::new();
        let dim = DimensionId(-1);
        assert!(!env.has_sky(dim));
        assert!(!env.daylight_cycle_enabled(dim));
        assert_eq!(env.world_time(dim), 0);
    }

    #[test]
    fn test_world_time_updates() {
        let dim = DimensionId(0);
        let mut env = StaticEnvironment::new().with_dimension(dim, DimensionInfo::new(42));
        env.set_world_time(dim, 48000);
        assert_eq!(env.world_time(dim), 48000);
        assert_eq!(env.seed(dim), 42);
        assert!(env.has_sky(dim));
    }
}
