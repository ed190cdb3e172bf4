//! Constellation registry for loading and querying constellation definitions.
//!
//! The registry is the scheduler's view of which constellations exist. It
//! can be filled in code or loaded from a TOML file of `[[constellation]]`
//! tables. Once handed to a [`SkyRegistry`](crate::sky::SkyRegistry) it is
//! treated as an immutable snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::definition::{Constellation, ConstellationDef, PhaseSet};
use crate::core::error::{Result, SkyError};
use crate::core::types::ConstellationId;

/// On-disk layout of a registry file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default, rename = "constellation")]
    pub constellations: Vec<ConstellationDef>,
}

/// Registry for managing constellation definitions
#[derive(Debug, Clone, Default)]
pub struct ConstellationRegistry {
    /// Constellations indexed by id (ids are dense, in registration order)
    constellations: Vec<Constellation>,
    /// Map from name to ID for fast lookup
    by_name: HashMap<String, ConstellationId>,
}

impl ConstellationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constellation and return its assigned ID
    pub fn register(&mut self, def: ConstellationDef) -> Result<ConstellationId> {
        let phases = def.validate()?;
        if self.by_name.contains_key(&def.name) {
            return Err(SkyError::DuplicateConstellation(def.name));
        }

        let id = ConstellationId(self.constellations.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.constellations.push(Constellation {
            id,
            name: def.name,
            tier: def.tier,
            special_showup: def.special_showup,
            phases,
        });

        tracing::trace!("Registered constellation {:?}", id);
        Ok(id)
    }

    /// Parse a registry from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(content)?;
        let mut registry = Self::new();
        for def in file.constellations {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Load a registry from a TOML file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded {} constellations from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }

    pub fn get(&self, id: ConstellationId) -> Option<&Constellation> {
        self.constellations.get(id.index())
    }

    pub fn id_by_name(&self, name: &str) -> Option<ConstellationId> {
        self.by_name.get(name).copied()
    }

    /// Look up by name, failing for unknown names
    pub fn require(&self, name: &str) -> Result<ConstellationId> {
        self.id_by_name(name)
            .ok_or_else(|| SkyError::UnknownConstellation(name.to_string()))
    }

    pub fn name(&self, id: ConstellationId) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constellation> {
        self.constellations.iter()
    }

    /// Weak constellations, majors included, in registration order
    pub fn weak(&self) -> Vec<ConstellationId> {
        self.ids_where(|c| c.is_weak())
    }

    /// Major constellations in registration order
    pub fn major(&self) -> Vec<ConstellationId> {
        self.ids_where(|c| c.is_major())
    }

    /// Minor constellations in registration order
    pub fn minor(&self) -> Vec<ConstellationId> {
        self.ids_where(|c| c.is_minor())
    }

    pub fn is_special(&self, id: ConstellationId) -> bool {
        self.get(id).map_or(false, |c| c.special_showup)
    }

    /// Moon phases of a constellation in a world with `seed`
    pub fn phases(&self, id: ConstellationId, seed: u64) -> PhaseSet {
        self.get(id).map(|c| c.phases_for(seed)).unwrap_or_default()
    }

    fn ids_where(&self, predicate: impl Fn(&Constellation) -> bool) -> Vec<ConstellationId> {
        self.constellations
            .iter()
            .filter(|c| predicate(c))
            .map(|c| c.id)
            .collect()
    }
}
