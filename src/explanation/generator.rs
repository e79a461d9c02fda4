//! Explanation Generator
//!
//! Runs the full rule cascade for every enclosure and records why each one
//! was admitted or rejected.

use crate::error::QueryError;
use crate::explanation::types::{EnclosureExplanation, EvaluationReport};
use crate::query_engine::{QueryEngine, QueryResponse};

pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Build a report for `quantity` animals of `species`
    ///
    /// Invalid quantities and unknown species fail exactly as in `evaluate`.
    /// A query with no viable enclosure still yields a report.
    pub fn generate(
        engine: &QueryEngine,
        species: &str,
        quantity: i64,
    ) -> Result<EvaluationReport, QueryError> {
        let (animal, assessments) = engine.assess_all(species, quantity)?;
        let response = QueryResponse::from(engine.evaluate(species, quantity));

        let enclosures = engine
            .registry()
            .iter()
            .zip(assessments)
            .map(|(enclosure, assessment)| EnclosureExplanation {
                id: enclosure.id(),
                biome: enclosure.biome().to_string(),
                free_space: enclosure.free_space(),
                total_capacity: enclosure.total_capacity(),
                occupants: enclosure
                    .occupants()
                    .iter()
                    .map(|o| o.species.clone())
                    .collect(),
                verdict: assessment.verdict,
                reason: assessment.rejected_by().map(|rule| rule.rejection_text().to_string()),
                checks: assessment.checks,
            })
            .collect();

        Ok(EvaluationReport {
            species: animal.species().to_string(),
            quantity,
            unit_size: animal.unit_size(),
            space_needed: animal.space_needed(quantity),
            compatible_biomes: animal
                .compatible_biomes()
                .iter()
                .map(|b| b.to_string())
                .collect(),
            response,
            enclosures,
        })
    }
}
