//! Error types for the enclosure allocator
//!
//! `QueryError` is what a query hands back to its caller; `DataError` guards
//! the invariants of the registry and catalog while they are being built.

use serde::Serialize;
use thiserror::Error;

/// Failure outcomes of a query
///
/// These are ordinary results, not faults: callers branch on them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum QueryError {
    /// Quantity was zero or negative
    #[error("Invalid quantity")]
    InvalidQuantity(i64),

    /// Species name not present in the catalog (after lower-casing)
    #[error("Invalid animal")]
    UnknownSpecies(String),

    /// Inputs were valid but no enclosure passed every compatibility rule
    #[error("No viable enclosure")]
    NoViableEnclosure,
}

/// Violations of the data-construction invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("species '{0}' must have a positive unit size")]
    NonPositiveUnitSize(String),

    #[error("species '{0}' lists no compatible biomes")]
    NoCompatibleBiomes(String),

    #[error("species '{0}' is defined more than once")]
    DuplicateSpecies(String),

    #[error("enclosure id must be a positive integer")]
    ZeroEnclosureId,

    #[error("enclosure id {0} is used more than once")]
    DuplicateEnclosureId(u32),

    #[error("enclosure {0} must have a positive capacity")]
    NonPositiveCapacity(u32),

    #[error("enclosure {id} holds {occupied} units of animals but its capacity is {capacity}")]
    OverCapacity { id: u32, occupied: i64, capacity: u32 },

    #[error("enclosure {enclosure} houses species '{species}' which is not in the catalog")]
    UnknownOccupant { enclosure: u32, species: String },
}
