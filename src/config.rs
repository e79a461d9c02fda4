//! Zoo Configuration
//!
//! JSON description of the species catalog and the enclosure registry, and
//! the environment lookup that decides where a zoo is loaded from.
//!
//! ```json
//! {
//!   "species": { "lion": { "size": 3, "biomes": ["savanna"] } },
//!   "enclosures": [
//!     { "id": 5, "biome": "savanna", "capacity": 9, "occupants": ["lion"] }
//!   ]
//! }
//! ```
//!
//! An occupant is either a species name, sized from the catalog, or an
//! explicit `{ "species": ..., "size": ... }` object.

use crate::enclosure::{Enclosure, EnclosureRegistry};
use crate::error::DataError;
use crate::query_engine::QueryEngine;
use crate::species::SpeciesCatalog;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON zoo file
pub const CONFIG_ENV: &str = "ZOO_CONFIG";

/// Environment variable naming a directory of species/enclosure tables
pub const DATA_DIR_ENV: &str = "ZOO_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeciesRecord {
    pub size: u32,
    pub biomes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OccupantRecord {
    Named(String),
    Sized { species: String, size: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnclosureRecord {
    pub id: u32,
    pub biome: String,
    pub capacity: u32,
    #[serde(default)]
    pub occupants: Vec<OccupantRecord>,
}

/// Raw zoo description, before invariants are checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZooConfig {
    pub species: BTreeMap<String, SpeciesRecord>,
    pub enclosures: Vec<EnclosureRecord>,
}

impl ZooConfig {
    /// Load a zoo from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read zoo config: {:?}", path))?;
        Self::from_json(&contents).with_context(|| format!("Invalid zoo config: {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse zoo config JSON")
    }

    /// Build the species catalog
    pub fn catalog(&self) -> Result<SpeciesCatalog, DataError> {
        let mut catalog = SpeciesCatalog::new();
        for (name, record) in &self.species {
            catalog.insert(name, record.size, record.biomes.iter().map(String::as_str))?;
        }
        Ok(catalog)
    }

    /// Build the enclosure registry, sizing named occupants from `catalog`
    pub fn registry(&self, catalog: &SpeciesCatalog) -> Result<EnclosureRegistry, DataError> {
        let mut enclosures = Vec::with_capacity(self.enclosures.len());

        for record in &self.enclosures {
            let mut enclosure = Enclosure::new(record.id, record.biome.as_str(), record.capacity);

            for occupant in &record.occupants {
                enclosure = match occupant {
                    OccupantRecord::Named(species) => {
                        let spec = catalog.resolve(species).ok_or_else(|| {
                            DataError::UnknownOccupant {
                                enclosure: record.id,
                                species: species.clone(),
                            }
                        })?;
                        enclosure.with_occupant(spec.species(), spec.unit_size())
                    }
                    OccupantRecord::Sized { species, size } => {
                        if *size == 0 {
                            return Err(DataError::NonPositiveUnitSize(species.to_lowercase()));
                        }
                        enclosure.with_occupant(species, *size)
                    }
                };
            }

            enclosures.push(enclosure);
        }

        EnclosureRegistry::new(enclosures)
    }

    /// Check every invariant and build a query engine
    pub fn into_engine(self) -> Result<QueryEngine, DataError> {
        let catalog = self.catalog()?;
        let registry = self.registry(&catalog)?;
        Ok(QueryEngine::new(registry, catalog))
    }
}

/// Where a zoo is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZooSource {
    /// JSON file in the `ZooConfig` format
    Json(PathBuf),
    /// Directory holding `species` and `enclosures` tables
    Tables(PathBuf),
    /// The built-in sample zoo
    Sample,
}

impl ZooSource {
    /// `ZOO_CONFIG` wins over `ZOO_DATA_DIR`; neither set means the sample zoo
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(CONFIG_ENV).ok(),
            std::env::var(DATA_DIR_ENV).ok(),
        )
    }

    fn from_vars(config: Option<String>, data_dir: Option<String>) -> Self {
        match (config, data_dir) {
            (Some(path), _) if !path.is_empty() => ZooSource::Json(PathBuf::from(path)),
            (_, Some(dir)) if !dir.is_empty() => ZooSource::Tables(PathBuf::from(dir)),
            _ => ZooSource::Sample,
        }
    }

    pub fn load_config(&self) -> Result<ZooConfig> {
        match self {
            ZooSource::Json(path) => ZooConfig::load(path),
            ZooSource::Tables(dir) => crate::data::ZooTables::load(dir)?.to_config(),
            ZooSource::Sample => crate::sample::sample_config(),
        }
    }

    /// Load, validate and build the engine
    pub fn load_engine(&self) -> Result<QueryEngine> {
        let config = self.load_config()?;
        let engine = config
            .into_engine()
            .with_context(|| format!("Invalid zoo data from {}", self))?;

        tracing::info!(
            "Loaded zoo from {}: {} species, {} enclosures",
            self,
            engine.catalog().len(),
            engine.registry().len()
        );

        Ok(engine)
    }
}

impl std::fmt::Display for ZooSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZooSource::Json(path) => write!(f, "config {:?}", path),
            ZooSource::Tables(dir) => write!(f, "tables in {:?}", dir),
            ZooSource::Sample => f.write_str("sample zoo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZOO_JSON: &str = r#"{
        "species": {
            "lion": { "size": 3, "biomes": ["savanna"] },
            "Monkey": { "size": 1, "biomes": ["savanna", "forest"] }
        },
        "enclosures": [
            { "id": 1, "biome": "savanna", "capacity": 10, "occupants": ["MONKEY"] },
            { "id": 5, "biome": "savanna", "capacity": 9, "occupants": [{ "species": "Lion", "size": 3 }] },
            { "id": 2, "biome": "forest", "capacity": 5 }
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let config = ZooConfig::from_json(ZOO_JSON).unwrap();
        assert!(config.enclosures[2].occupants.is_empty());
        assert_eq!(
            config.enclosures[1].occupants,
            vec![OccupantRecord::Sized { species: "Lion".to_string(), size: 3 }]
        );

        let engine = config.into_engine().unwrap();
        assert_eq!(engine.catalog().species_names(), vec!["lion", "monkey"]);

        let first = engine.registry().get(1).unwrap();
        assert_eq!(first.occupants()[0].species, "monkey");
        assert_eq!(first.free_space(), 9);
        assert_eq!(engine.registry().get(5).unwrap().occupants()[0].species, "lion");
    }

    #[test]
    fn test_unknown_named_occupant() {
        let json = r#"{
            "species": { "lion": { "size": 3, "biomes": ["savanna"] } },
            "enclosures": [{ "id": 3, "biome": "savanna", "capacity": 7, "occupants": ["gazelle"] }]
        }"#;
        let err = ZooConfig::from_json(json).unwrap().into_engine().unwrap_err();
        assert_eq!(
            err,
            DataError::UnknownOccupant { enclosure: 3, species: "gazelle".to_string() }
        );
    }

    #[test]
    fn test_over_capacity_rejected() {
        let json = r#"{
            "species": { "lion": { "size": 3, "biomes": ["savanna"] } },
            "enclosures": [{ "id": 5, "biome": "savanna", "capacity": 5, "occupants": ["lion", "lion"] }]
        }"#;
        let err = ZooConfig::from_json(json).unwrap().into_engine().unwrap_err();
        assert_eq!(err, DataError::OverCapacity { id: 5, occupied: 6, capacity: 5 });
    }

    #[test]
    fn test_malformed_json() {
        assert!(ZooConfig::from_json("{ \"species\": 3 }").is_err());
    }

    #[test]
    fn test_source_selection() {
        assert_eq!(
            ZooSource::from_vars(Some("zoo.json".into()), Some("tables".into())),
            ZooSource::Json(PathBuf::from("zoo.json"))
        );
        assert_eq!(
            ZooSource::from_vars(None, Some("tables".into())),
            ZooSource::Tables(PathBuf::from("tables"))
        );
        assert_eq!(ZooSource::from_vars(Some(String::new()), None), ZooSource::Sample);
        assert_eq!(ZooSource::from_vars(None, None), ZooSource::Sample);
    }
}
