pub mod astronomy;
pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::Calendar;
pub use config::SkyConfig;
pub use error::{Result, SkyError};
pub use types::{ConstellationId, CycleSlot, DimensionId};
