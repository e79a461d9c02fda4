//! Enclosure Allocator
//!
//! Decides which existing zoo enclosures can take a group of animals of one
//! species.
//!
//! - `species`: Animal specs and the case-insensitive species catalog
//! - `enclosure`: Enclosures, occupants and the enclosure registry
//! - `compatibility/`: The ordered admission rules (capacity, biome, species rules)
//! - `query_engine`: `evaluate(species, quantity)` over an injected registry and catalog
//! - `explanation/`: Per-enclosure reports of why each rule admitted or rejected
//! - `config` / `data`: Loading zoos from JSON or CSV/Parquet tables
//! - `sample`: The built-in five-enclosure sample zoo

pub mod error;
pub mod species;
pub mod enclosure;
pub mod compatibility;
pub mod query_engine;
pub mod explanation;
pub mod config;
pub mod data;
pub mod sample;

// Re-export commonly used types
pub use error::{DataError, QueryError};
pub use species::{AnimalSpec, Biome, SpeciesCatalog};
pub use enclosure::{Enclosure, EnclosureRegistry, Occupant};
pub use compatibility::{assess, is_admissible, Assessment, RuleKind, Verdict};
pub use query_engine::{QueryEngine, QueryResponse, ViableEnclosure};
pub use config::{ZooConfig, ZooSource};
