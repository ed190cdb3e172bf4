//! Constellation definitions
//!
//! A constellation is registered once with its tier, an optional special
//! showup flag and, for minor constellations, the rule that yields the moon
//! phases it appears on.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::astronomy::CYCLE_LENGTH;
use crate::core::error::{Result, SkyError};
use crate::core::types::{ConstellationId, CycleSlot};

/// Scheduling tier of a constellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Weak constellation without a distribution curve
    Major,
    /// Packed into a 5-slot run with a sine distribution curve
    Weak,
    /// Placed by moon phase
    Minor,
}

impl Tier {
    /// Major refines Weak, so both count as weak for scheduling
    pub fn is_weak(&self) -> bool {
        matches!(self, Tier::Weak | Tier::Major)
    }

    pub fn is_major(&self) -> bool {
        matches!(self, Tier::Major)
    }

    pub fn is_minor(&self) -> bool {
        matches!(self, Tier::Minor)
    }
}

/// Set of moon phases (cycle slots) stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PhaseSet(u8);

impl PhaseSet {
    pub fn empty() -> Self {
        Self(0)
    }

    /// Every phase of the cycle
    pub fn full() -> Self {
        Self(u8::MAX)
    }

    /// Build a set from raw phase values, rejecting values outside the cycle
    pub fn from_phases(name: &str, phases: &[u8]) -> Result<Self> {
        let mut set = Self::empty();
        for &phase in phases {
            if phase >= CYCLE_LENGTH {
                return Err(SkyError::InvalidPhase {
                    name: name.to_string(),
                    phase,
                    limit: CYCLE_LENGTH,
                });
            }
            set.insert(CycleSlot::new(phase));
        }
        Ok(set)
    }

    pub fn insert(&mut self, slot: CycleSlot) {
        self.0 |= 1 << slot.value();
    }

    pub fn contains(&self, slot: CycleSlot) -> bool {
        self.0 & (1 << slot.value()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Phases in ascending order
    pub fn iter(&self) -> impl Iterator<Item = CycleSlot> + '_ {
        CycleSlot::all().filter(move |slot| self.contains(*slot))
    }
}

/// How a minor constellation picks its phases for a world
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseRule {
    /// Same phases in every world
    Fixed(PhaseSet),
    /// `count` distinct phases derived from the world seed
    Seeded { count: u8 },
}

impl PhaseRule {
    /// Phases for a given constellation in a world with `seed`.
    ///
    /// Seeded rules draw from their own stream so that querying phases never
    /// advances the schedule's random stream.
    pub fn phases_for(&self, id: ConstellationId, seed: u64) -> PhaseSet {
        match self {
            PhaseRule::Fixed(set) => *set,
            PhaseRule::Seeded { count } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed ^ mix_id(id));
                let mut slots: Vec<CycleSlot> = CycleSlot::all().collect();
                slots.shuffle(&mut rng);

                let mut set = PhaseSet::empty();
                for slot in slots.into_iter().take((*count).min(CYCLE_LENGTH) as usize) {
                    set.insert(slot);
                }
                set
            }
        }
    }
}

/// splitmix64 finalizer, spreads small ids across the seed space
fn mix_id(id: ConstellationId) -> u64 {
    let mut z = (id.0 as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A registered constellation
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    pub id: ConstellationId,
    pub name: String,
    pub tier: Tier,
    /// Shown through its own trigger rather than the regular cycle
    pub special_showup: bool,
    /// Only present for minor constellations
    pub phases: Option<PhaseRule>,
}

impl Constellation {
    pub fn is_weak(&self) -> bool {
        self.tier.is_weak()
    }

    pub fn is_major(&self) -> bool {
        self.tier.is_major()
    }

    pub fn is_minor(&self) -> bool {
        self.tier.is_minor()
    }

    /// Phases this constellation shows up on in a world with `seed`.
    /// Empty for anything that is not a minor constellation.
    pub fn phases_for(&self, seed: u64) -> PhaseSet {
        self.phases
            .as_ref()
            .map(|rule| rule.phases_for(self.id, seed))
            .unwrap_or_default()
    }
}

/// Constellation entry as written in a registry file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationDef {
    pub name: String,
    pub tier: Tier,
    #[serde(default)]
    pub special_showup: bool,
    /// Fixed phases for a minor constellation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<u8>>,
    /// Number of seed-derived phases for a minor constellation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeded_phases: Option<u8>,
}

impl ConstellationDef {
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
            special_showup: false,
            phases: None,
            seeded_phases: None,
        }
    }

    pub fn with_phases(mut self, phases: &[u8]) -> Self {
        self.phases = Some(phases.to_vec());
        self
    }

    pub fn with_seeded_phases(mut self, count: u8) -> Self {
        self.seeded_phases = Some(count);
        self
    }

    pub fn special(mut self) -> Self {
        self.special_showup = true;
        self
    }

    /// Check the definition and resolve its phase rule
    pub fn validate(&self) -> Result<Option<PhaseRule>> {
        if self.name.trim().is_empty() {
            return Err(SkyError::InvalidDefinition(
                "constellation name must not be empty".into(),
            ));
        }

        match (self.tier, &self.phases, self.seeded_phases) {
            (Tier::Minor, Some(_), Some(_)) => Err(SkyError::InvalidDefinition(format!(
                "{}: use either phases or seeded_phases, not both",
                self.name
            ))),
            (Tier::Minor, Some(phases), None) => {
                Ok(Some(PhaseRule::Fixed(PhaseSet::from_phases(&self.name, phases)?)))
            }
            (Tier::Minor, None, Some(count)) => {
                if count > CYCLE_LENGTH {
                    return Err(SkyError::InvalidDefinition(format!(
                        "{}: seeded_phases ({}) exceeds the cycle length ({})",
                        self.name, count, CYCLE_LENGTH
                    )));
                }
                Ok(Some(PhaseRule::Seeded { count }))
            }
            (Tier::Minor, None, None) => Err(SkyError::InvalidDefinition(format!(
                "{}: minor constellations need phases or seeded_phases",
                self.name
            ))),
            (_, None, None) => Ok(None),
            (tier, _, _) => Err(SkyError::InvalidDefinition(format!(
                "{}: only minor constellations take phases (tier is {:?})",
                self.name, tier
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_counts_as_weak() {
        assert!(Tier::Major.is_weak());
        assert!(Tier::Weak.is_weak());
        assert!(!Tier::Minor.is_weak());
        assert!(Tier::Major.is_major());
        assert!(!Tier::Weak.is_major());
    }

    #[test]
    fn test_phase_set_iterates_ascending() {
        let set = PhaseSet::from_phases("gelu", &[5, 1, 3, 1]).unwrap();
        let phases: Vec<u8> = set.iter().map(|s| s.value()).collect();
        assert_eq!(phases, vec![1, 3, 5]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(CycleSlot::new(3)));
        assert!(!set.contains(CycleSlot::new(4)));
    }

    #[test]
    fn test_phase_set_rejects_out_of_cycle_phase() {
        let result = PhaseSet::from_phases("gelu", &[2, 8]);
        assert!(matches!(result, Err(SkyError::InvalidPhase { phase: 8, .. })));
    }

    #[test]
    fn test_full_phase_set() {
        assert_eq!(PhaseSet::full().len(), 8);
        assert!(PhaseSet::empty().is_empty());
    }

    #[test]
    fn test_seeded_phases_are_stable_per_seed() {
        let rule = PhaseRule::Seeded { count: 3 };
        let id = ConstellationId(4);
        let a = rule.phases_for(id, 42);
        let b = rule.phases_for(id, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_seeded_phases_count_is_clamped() {
        let rule = PhaseRule::Seeded { count: 12 };
        assert_eq!(rule.phases_for(ConstellationId(0), 1).len(), 8);
    }

    #[test]
    fn test_fixed_phases_ignore_seed() {
        let set = PhaseSet::from_phases("vorux", &[0, 4]).unwrap();
        let rule = PhaseRule::Fixed(set);
        assert_eq!(rule.phases_for(ConstellationId(1), 1), set);
        assert_eq!(rule.phases_for(ConstellationId(1), 999), set);
    }

    #[test]
    fn test_validate_minor_needs_phases() {
        let def = ConstellationDef::new("alcara", Tier::Minor);
        assert!(matches!(def.validate(), Err(SkyError::InvalidDefinition(_))));

        let def = ConstellationDef::new("alcara", Tier::Minor).with_seeded_phases(2);
        assert_eq!(def.validate().unwrap(), Some(PhaseRule::Seeded { count: 2 }));
    }

    #[test]
    fn test_validate_rejects_phases_on_weak() {
        let def = ConstellationDef::new("lucerna", Tier::Weak).with_phases(&[1]);
        assert!(matches!(def.validate(), Err(SkyError::InvalidDefinition(_))));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let def = ConstellationDef::new("  ", Tier::Weak);
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_non_minor_has_no_phases() {
        let constellation = Constellation {
            id: ConstellationId(0),
            name: "discidia".into(),
            tier: Tier::Major,
            special_showup: false,
            phases: None,
        };
        assert!(constellation.phases_for(7).is_empty());
    }
}
