//! Host-facing sky surface: per-dimension registry and environment seam

pub mod environment;
pub mod registry;

pub use environment::{DimensionInfo, SkyEnvironment, StaticEnvironment};
pub use registry::{SkyRegistry, AMBIENT_DAYTIME_FACTOR};
