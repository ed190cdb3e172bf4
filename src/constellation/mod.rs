//! Constellation definitions and the registry the scheduler reads from

pub mod definition;
pub mod registry;

pub use definition::{Constellation, ConstellationDef, PhaseRule, PhaseSet, Tier};
pub use registry::{ConstellationRegistry, RegistryFile};
