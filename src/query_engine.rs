//! Query Engine
//!
//! Answers "where can these animals go?" against an injected registry and
//! catalog. Every query is a pure read: no occupancy is changed, no state is
//! kept between calls, so one engine can be shared freely between callers.

use crate::compatibility::{assess, is_admissible, Assessment};
use crate::enclosure::{Enclosure, EnclosureRegistry};
use crate::error::QueryError;
use crate::species::{AnimalSpec, SpeciesCatalog};
use serde::Serialize;
use std::fmt;

/// An enclosure that admits the requested animals
///
/// `free_space` is the current free space, before the new animals arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViableEnclosure {
    pub id: u32,
    pub free_space: i64,
    pub total_capacity: u32,
}

impl ViableEnclosure {
    fn from_enclosure(enclosure: &Enclosure) -> Self {
        Self {
            id: enclosure.id(),
            free_space: enclosure.free_space(),
            total_capacity: enclosure.total_capacity(),
        }
    }
}

impl fmt::Display for ViableEnclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enclosure {} (free space: {} total: {})",
            self.id, self.free_space, self.total_capacity
        )
    }
}

/// Serialisable form of an `evaluate` result
///
/// `{"viableEnclosures": [...]}` on success, `{"error": "..."}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viable_enclosures: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Vec<String>, QueryError>> for QueryResponse {
    fn from(result: Result<Vec<String>, QueryError>) -> Self {
        match result {
            Ok(descriptors) => QueryResponse {
                viable_enclosures: Some(descriptors),
                error: None,
            },
            Err(err) => QueryResponse {
                viable_enclosures: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryEngine {
    registry: EnclosureRegistry,
    catalog: SpeciesCatalog,
}

impl QueryEngine {
    pub fn new(registry: EnclosureRegistry, catalog: SpeciesCatalog) -> Self {
        Self { registry, catalog }
    }

    pub fn registry(&self) -> &EnclosureRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    /// Descriptors of every enclosure that can take `quantity` animals of
    /// `species`, ascending by enclosure id
    ///
    /// Format: `"Enclosure {id} (free space: {free} total: {capacity})"`
    pub fn evaluate(&self, species: &str, quantity: i64) -> Result<Vec<String>, QueryError> {
        let viable = self.viable_enclosures(species, quantity)?;
        Ok(viable.iter().map(ToString::to_string).collect())
    }

    /// Structured form of [`QueryEngine::evaluate`]
    pub fn viable_enclosures(
        &self,
        species: &str,
        quantity: i64,
    ) -> Result<Vec<ViableEnclosure>, QueryError> {
        let animal = self.validate(species, quantity)?;

        let mut viable: Vec<ViableEnclosure> = self
            .registry
            .iter()
            .filter(|enclosure| is_admissible(enclosure, &animal, quantity))
            .map(ViableEnclosure::from_enclosure)
            .collect();

        if viable.is_empty() {
            tracing::debug!(
                "No viable enclosure for {} x{} among {} enclosures",
                animal.species(),
                quantity,
                self.registry.len()
            );
            return Err(QueryError::NoViableEnclosure);
        }

        viable.sort_by_key(|v| v.id);

        tracing::debug!(
            "{} x{}: {} of {} enclosures viable",
            animal.species(),
            quantity,
            viable.len(),
            self.registry.len()
        );

        Ok(viable)
    }

    /// Assess every enclosure, in registry order, without filtering
    ///
    /// Input checks are the same as `evaluate`; an all-rejected registry is
    /// not an error here.
    pub fn assess_all(
        &self,
        species: &str,
        quantity: i64,
    ) -> Result<(AnimalSpec, Vec<Assessment>), QueryError> {
        let animal = self.validate(species, quantity)?;
        let assessments = self
            .registry
            .iter()
            .map(|enclosure| assess(enclosure, &animal, quantity))
            .collect();
        Ok((animal, assessments))
    }

    fn validate(&self, species: &str, quantity: i64) -> Result<AnimalSpec, QueryError> {
        if quantity <= 0 {
            return Err(QueryError::InvalidQuantity(quantity));
        }
        self.catalog
            .resolve(species)
            .ok_or_else(|| QueryError::UnknownSpecies(species.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::SAVANNA_AND_RIVER;

    fn engine(enclosures: Vec<Enclosure>) -> QueryEngine {
        let catalog = SpeciesCatalog::new()
            .with_species("lion", 3, ["savanna"])
            .and_then(|c| c.with_species("leopard", 2, ["savanna"]))
            .and_then(|c| c.with_species("monkey", 1, ["savanna", "forest"]))
            .and_then(|c| c.with_species("hippopotamus", 4, ["savanna", "river"]))
            .unwrap();
        QueryEngine::new(EnclosureRegistry::new(enclosures).unwrap(), catalog)
    }

    #[test]
    fn test_invalid_quantity_checked_before_species() {
        let engine = engine(vec![]);
        assert_eq!(engine.evaluate("unicorn", 0), Err(QueryError::InvalidQuantity(0)));
        assert_eq!(engine.evaluate("monkey", -3), Err(QueryError::InvalidQuantity(-3)));
    }

    #[test]
    fn test_unknown_species_keeps_original_name() {
        let engine = engine(vec![]);
        assert_eq!(
            engine.evaluate("Unicorn", 1),
            Err(QueryError::UnknownSpecies("Unicorn".to_string()))
        );
    }

    #[test]
    fn test_scenario_monkeys() {
        let engine = engine(vec![
            Enclosure::new(1, "savanna", 10).with_occupant("monkey", 1),
            Enclosure::new(2, "forest", 5),
        ]);
        assert_eq!(
            engine.evaluate("monkey", 2),
            Ok(vec!["Enclosure 1 (free space: 9 total: 10)".to_string()])
        );
    }

    #[test]
    fn test_scenario_leopard_with_lion() {
        let engine = engine(vec![Enclosure::new(5, "savanna", 9).with_occupant("lion", 3)]);
        assert_eq!(engine.evaluate("leopard", 2), Err(QueryError::NoViableEnclosure));
    }

    #[test]
    fn test_scenario_hippo_composite_biome() {
        let engine = engine(vec![
            Enclosure::new(3, SAVANNA_AND_RIVER, 7).with_occupant("gazelle", 2),
        ]);
        assert_eq!(engine.evaluate("hippopotamus", 1), Err(QueryError::NoViableEnclosure));
    }

    #[test]
    fn test_results_sorted_by_id() {
        let engine = engine(vec![
            Enclosure::new(9, "savanna", 10).with_occupant("monkey", 1),
            Enclosure::new(2, "forest", 6).with_occupant("monkey", 1),
            Enclosure::new(5, "savanna", 4).with_occupant("monkey", 1),
        ]);

        let ids: Vec<u32> = engine
            .viable_enclosures("MONKEY", 1)
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_free_space_is_current_not_projected() {
        let engine = engine(vec![Enclosure::new(4, "savanna", 12).with_occupant("lion", 3)]);
        let viable = engine.viable_enclosures("lion", 2).unwrap();
        assert_eq!(viable[0].free_space, 9);
        assert_eq!(viable[0].to_string(), "Enclosure 4 (free space: 9 total: 12)");
    }

    #[test]
    fn test_assess_all_keeps_registry_order() {
        let engine = engine(vec![
            Enclosure::new(2, "forest", 5),
            Enclosure::new(1, "savanna", 10).with_occupant("monkey", 1),
        ]);

        let (animal, assessments) = engine.assess_all("monkey", 2).unwrap();
        assert_eq!(animal.species(), "monkey");
        assert_eq!(assessments.len(), 2);
        assert_eq!(assessments[0].enclosure_id, 2);
        assert!(!assessments[0].is_admitted());
        assert!(assessments[1].is_admitted());

        assert_eq!(engine.assess_all("monkey", 0).unwrap_err(), QueryError::InvalidQuantity(0));
    }

    #[test]
    fn test_query_response_json() {
        let ok = QueryResponse::from(Ok(vec!["Enclosure 1 (free space: 9 total: 10)".to_string()]));
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"viableEnclosures":["Enclosure 1 (free space: 9 total: 10)"]}"#
        );

        let err = QueryResponse::from(Err(QueryError::NoViableEnclosure));
        assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"error":"No viable enclosure"}"#);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryEngine>();
    }
}
