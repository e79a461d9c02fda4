//! Species Catalog
//!
//! Maps lower-cased species identifiers to their `AnimalSpec`: the space one
//! individual occupies and the biomes it can live in.
//!
//! Biomes are atomic identifiers. A composite biome such as
//! `savanna-and-river` is its own token and never matches `savanna` or
//! `river` on its own.

use crate::error::DataError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Composite biome required by hippopotamuses
pub const SAVANNA_AND_RIVER: &str = "savanna-and-river";

/// Habitat identifier, compared by exact equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Biome(String);

impl Biome {
    pub fn new(id: impl Into<String>) -> Self {
        Biome(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Biome {
    fn from(id: &str) -> Self {
        Biome::new(id)
    }
}

impl From<String> for Biome {
    fn from(id: String) -> Self {
        Biome(id)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable description of a species as resolved from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalSpec {
    species: String,
    unit_size: u32,
    compatible_biomes: BTreeSet<Biome>,
}

impl AnimalSpec {
    /// Lower-cased species identifier
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Space occupied by one individual
    pub fn unit_size(&self) -> u32 {
        self.unit_size
    }

    pub fn compatible_biomes(&self) -> &BTreeSet<Biome> {
        &self.compatible_biomes
    }

    /// Exact membership test, no partial matching on composite biomes
    pub fn accepts_biome(&self, biome: &Biome) -> bool {
        self.compatible_biomes.contains(biome)
    }

    /// Space taken by `quantity` individuals
    ///
    /// Saturates instead of overflowing; a saturated value can never fit.
    pub fn space_needed(&self, quantity: i64) -> i64 {
        i64::from(self.unit_size).saturating_mul(quantity)
    }
}

/// Lower-cased species identifier used as the catalog key
pub fn normalize_species(name: &str) -> String {
    name.to_lowercase()
}

/// Static mapping from species identifier to `AnimalSpec`
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    entries: FxHashMap<String, AnimalSpec>,
}

impl SpeciesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a species
    ///
    /// The name is lower-cased. Rejects a zero unit size, an empty biome list
    /// and names that are already registered.
    pub fn insert<I, B>(&mut self, name: &str, unit_size: u32, biomes: I) -> Result<(), DataError>
    where
        I: IntoIterator<Item = B>,
        B: Into<Biome>,
    {
        let species = normalize_species(name);

        if unit_size == 0 {
            return Err(DataError::NonPositiveUnitSize(species));
        }

        let compatible_biomes: BTreeSet<Biome> = biomes.into_iter().map(Into::into).collect();
        if compatible_biomes.is_empty() {
            return Err(DataError::NoCompatibleBiomes(species));
        }

        if self.entries.contains_key(&species) {
            return Err(DataError::DuplicateSpecies(species));
        }

        self.entries.insert(
            species.clone(),
            AnimalSpec {
                species,
                unit_size,
                compatible_biomes,
            },
        );
        Ok(())
    }

    /// Builder form of [`SpeciesCatalog::insert`]
    pub fn with_species<I, B>(mut self, name: &str, unit_size: u32, biomes: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = B>,
        B: Into<Biome>,
    {
        self.insert(name, unit_size, biomes)?;
        Ok(self)
    }

    /// Case-insensitive lookup; `None` when the species is not catalogued
    pub fn resolve(&self, name: &str) -> Option<AnimalSpec> {
        self.entries.get(&normalize_species(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_species(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalogued species identifiers, sorted
    pub fn species_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SpeciesCatalog {
        SpeciesCatalog::new()
            .with_species("monkey", 1, ["savanna", "forest"])
            .unwrap()
            .with_species("Hippopotamus", 4, ["savanna", "river"])
            .unwrap()
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = catalog();

        let spec = catalog.resolve("MoNkEy").expect("monkey should resolve");
        assert_eq!(spec.species(), "monkey");
        assert_eq!(spec.unit_size(), 1);

        // Keys are stored lower-cased too
        assert!(catalog.resolve("hippopotamus").is_some());
        assert!(catalog.contains("HIPPOPOTAMUS"));
    }

    #[test]
    fn test_resolve_unknown_species() {
        assert!(catalog().resolve("unicorn").is_none());
        assert!(catalog().resolve("").is_none());
    }

    #[test]
    fn test_composite_biome_is_atomic() {
        let hippo = catalog().resolve("hippopotamus").unwrap();
        assert!(hippo.accepts_biome(&Biome::from("savanna")));
        assert!(hippo.accepts_biome(&Biome::from("river")));
        assert!(!hippo.accepts_biome(&Biome::from(SAVANNA_AND_RIVER)));
        assert!(!hippo.accepts_biome(&Biome::from("Savanna")));
    }

    #[test]
    fn test_insert_rejects_invalid_entries() {
        let mut catalog = SpeciesCatalog::new();
        assert_eq!(
            catalog.insert("ghost", 0, ["forest"]),
            Err(DataError::NonPositiveUnitSize("ghost".to_string()))
        );
        assert_eq!(
            catalog.insert("drifter", 2, Vec::<&str>::new()),
            Err(DataError::NoCompatibleBiomes("drifter".to_string()))
        );

        catalog.insert("lion", 3, ["savanna"]).unwrap();
        assert_eq!(
            catalog.insert("LION", 3, ["savanna"]),
            Err(DataError::DuplicateSpecies("lion".to_string()))
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_space_needed_saturates() {
        let monkey = catalog().resolve("monkey").unwrap();
        assert_eq!(monkey.space_needed(7), 7);

        let hippo = catalog().resolve("hippopotamus").unwrap();
        assert_eq!(hippo.space_needed(i64::MAX), i64::MAX);
    }

    #[test]
    fn test_species_names_sorted() {
        assert_eq!(catalog().species_names(), vec!["hippopotamus", "monkey"]);
    }
}
