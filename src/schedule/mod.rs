//! Constellation scheduling
//!
//! Seeded slot packing for weak constellations, phase placement for minor
//! ones, the per-day selection and the day/night curve.

pub mod allocator;
pub mod curve;
pub mod day_schedule;
pub mod daytime;
pub mod minor;
pub mod seed;
pub mod world_state;

pub use allocator::{allocate_run, SlotOccupancy};
pub use curve::curve;
pub use day_schedule::DaySkySchedule;
pub use daytime::{daytime_distribution, DayPhase};
pub use seed::SeedSource;
pub use world_state::WorldCycleState;
