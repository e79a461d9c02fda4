use serde::Serialize;
use crate::compatibility::{RuleCheck, Verdict};
use crate::query_engine::QueryResponse;

/// Complete explanation of one placement query
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub species: String,
    pub quantity: i64,
    pub unit_size: u32,
    pub space_needed: i64,
    pub compatible_biomes: Vec<String>,
    /// What `evaluate` returns for the same inputs
    pub response: QueryResponse,
    /// One entry per enclosure, in registry order
    pub enclosures: Vec<EnclosureExplanation>,
}

impl EvaluationReport {
    pub fn admitted_count(&self) -> usize {
        self.enclosures
            .iter()
            .filter(|e| e.verdict == Verdict::Admitted)
            .count()
    }
}

/// Per-enclosure verdict with the reasoning behind it
#[derive(Debug, Clone, Serialize)]
pub struct EnclosureExplanation {
    pub id: u32,
    pub biome: String,
    pub free_space: i64,
    pub total_capacity: u32,
    pub occupants: Vec<String>,
    pub verdict: Verdict,
    /// Human-readable rejection reason; `None` when admitted
    pub reason: Option<String>,
    pub checks: Vec<RuleCheck>,
}
