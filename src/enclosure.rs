//! Enclosures and the Enclosure Registry
//!
//! An enclosure never stores its free space: it is recomputed from the
//! occupants every time it is asked for, so it cannot go stale.

use crate::error::DataError;
use crate::species::{normalize_species, Biome};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// One animal currently housed in an enclosure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub species: String,
    pub unit_size: u32,
}

/// Most enclosures hold a handful of animals
pub type Occupants = SmallVec<[Occupant; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    id: u32,
    biome: Biome,
    total_capacity: u32,
    occupants: Occupants,
}

impl Enclosure {
    /// Create an empty enclosure
    pub fn new(id: u32, biome: impl Into<Biome>, total_capacity: u32) -> Self {
        Self {
            id,
            biome: biome.into(),
            total_capacity,
            occupants: SmallVec::new(),
        }
    }

    /// Add an existing occupant (species name is lower-cased)
    pub fn with_occupant(mut self, species: &str, unit_size: u32) -> Self {
        self.occupants.push(Occupant {
            species: normalize_species(species),
            unit_size,
        });
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn biome(&self) -> &Biome {
        &self.biome
    }

    pub fn total_capacity(&self) -> u32 {
        self.total_capacity
    }

    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Sum of the occupants' unit sizes
    pub fn occupied_space(&self) -> i64 {
        self.occupants.iter().map(|o| i64::from(o.unit_size)).sum()
    }

    /// Current free space (capacity minus occupied space)
    pub fn free_space(&self) -> i64 {
        i64::from(self.total_capacity) - self.occupied_space()
    }

    /// True when any current occupant belongs to a species other than `species`
    pub fn houses_other_species(&self, species: &str) -> bool {
        self.occupants.iter().any(|o| o.species != species)
    }
}

/// Ordered, read-only collection of enclosures
///
/// Construction checks the invariants the evaluator relies on: unique positive
/// ids, positive capacities and no enclosure over capacity.
#[derive(Debug, Clone, Default)]
pub struct EnclosureRegistry {
    enclosures: Vec<Enclosure>,
}

impl EnclosureRegistry {
    pub fn new(enclosures: Vec<Enclosure>) -> Result<Self, DataError> {
        let mut seen = FxHashSet::default();

        for enclosure in &enclosures {
            if enclosure.id == 0 {
                return Err(DataError::ZeroEnclosureId);
            }
            if !seen.insert(enclosure.id) {
                return Err(DataError::DuplicateEnclosureId(enclosure.id));
            }
            if enclosure.total_capacity == 0 {
                return Err(DataError::NonPositiveCapacity(enclosure.id));
            }
            if enclosure.free_space() < 0 {
                return Err(DataError::OverCapacity {
                    id: enclosure.id,
                    occupied: enclosure.occupied_space(),
                    capacity: enclosure.total_capacity,
                });
            }
        }

        Ok(Self { enclosures })
    }

    /// Enclosures in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, Enclosure> {
        self.enclosures.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Enclosure> {
        self.enclosures.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.enclosures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enclosures.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnclosureRegistry {
    type Item = &'a Enclosure;
    type IntoIter = std::slice::Iter<'a, Enclosure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
