//! Compatibility Rules
//!
//! The admission cascade as an ordered table of named rules. Each rule looks
//! at one candidate placement and answers `Allow` (it applied and passed),
//! `Skip` (it does not apply) or `Deny`. Evaluation stops at the first `Deny`.

use crate::enclosure::Enclosure;
use crate::species::{AnimalSpec, SAVANNA_AND_RIVER};
use serde::Serialize;

/// Species that only tolerate their own kind
pub const EXCLUSIVE_CARNIVORES: &[&str] = &["lion", "leopard"];

pub const HIPPOPOTAMUS: &str = "hippopotamus";

pub const MONKEY: &str = "monkey";

/// Extra space charged when different species share an enclosure
pub const MIXED_SPECIES_MARGIN: i64 = 1;

/// One proposed placement: `quantity` animals of `animal` into `enclosure`
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub enclosure: &'a Enclosure,
    pub animal: &'a AnimalSpec,
    pub quantity: i64,
}

impl<'a> Candidate<'a> {
    pub fn new(enclosure: &'a Enclosure, animal: &'a AnimalSpec, quantity: i64) -> Self {
        Self {
            enclosure,
            animal,
            quantity,
        }
    }

    pub fn space_needed(&self) -> i64 {
        self.animal.space_needed(self.quantity)
    }

    /// Free space left once the new animals are in (may be negative)
    pub fn space_after_introduction(&self) -> i64 {
        self.enclosure.free_space() - self.space_needed()
    }

    /// Enclosure already holds a species other than the incoming one
    pub fn is_mixed(&self) -> bool {
        !self.enclosure.is_empty() && self.enclosure.houses_other_species(self.animal.species())
    }
}

/// Identifies each rule in the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Capacity,
    Biome,
    ExclusiveCarnivore,
    HippopotamusBiome,
    MonkeyCompanion,
    MixedSpeciesMargin,
}

impl RuleKind {
    pub fn display_text(&self) -> &'static str {
        match self {
            RuleKind::Capacity => "Capacity",
            RuleKind::Biome => "Biome",
            RuleKind::ExclusiveCarnivore => "Exclusive carnivore",
            RuleKind::HippopotamusBiome => "Hippopotamus biome",
            RuleKind::MonkeyCompanion => "Monkey companion",
            RuleKind::MixedSpeciesMargin => "Mixed-species margin",
        }
    }

    /// Why a placement fails this rule
    pub fn rejection_text(&self) -> &'static str {
        match self {
            RuleKind::Capacity => "Not enough free space for the new animals",
            RuleKind::Biome => "Enclosure biome is not one the species can live in",
            RuleKind::ExclusiveCarnivore => "Lions and leopards only share space with their own species",
            RuleKind::HippopotamusBiome => "Hippopotamuses need a savanna-and-river enclosure",
            RuleKind::MonkeyCompanion => "Monkeys need at least one animal already present",
            RuleKind::MixedSpeciesMargin => "No room for the extra space mixed species require",
        }
    }
}

/// Answer of one rule for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    Allow,
    Skip,
    Deny,
}

impl RuleOutcome {
    fn from_pass(pass: bool) -> Self {
        if pass {
            RuleOutcome::Allow
        } else {
            RuleOutcome::Deny
        }
    }
}

/// A named predicate in the cascade
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    check: fn(&Candidate<'_>) -> RuleOutcome,
}

impl Rule {
    pub fn check(&self, candidate: &Candidate<'_>) -> RuleOutcome {
        (self.check)(candidate)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// The cascade, in evaluation order
pub const RULES: [Rule; 6] = [
    Rule { kind: RuleKind::Capacity, check: check_capacity },
    Rule { kind: RuleKind::Biome, check: check_biome },
    Rule { kind: RuleKind::ExclusiveCarnivore, check: check_exclusive_carnivore },
    Rule { kind: RuleKind::HippopotamusBiome, check: check_hippopotamus_biome },
    Rule { kind: RuleKind::MonkeyCompanion, check: check_monkey_companion },
    Rule { kind: RuleKind::MixedSpeciesMargin, check: check_mixed_species_margin },
];

fn check_capacity(candidate: &Candidate<'_>) -> RuleOutcome {
    RuleOutcome::from_pass(candidate.space_after_introduction() >= 0)
}

fn check_biome(candidate: &Candidate<'_>) -> RuleOutcome {
    RuleOutcome::from_pass(candidate.animal.accepts_biome(candidate.enclosure.biome()))
}

fn check_exclusive_carnivore(candidate: &Candidate<'_>) -> RuleOutcome {
    let species = candidate.animal.species();
    if !EXCLUSIVE_CARNIVORES.iter().any(|c| *c == species) {
        return RuleOutcome::Skip;
    }
    RuleOutcome::from_pass(!candidate.is_mixed())
}

/// Applies on top of the biome-set check: hippos need the composite biome itself
fn check_hippopotamus_biome(candidate: &Candidate<'_>) -> RuleOutcome {
    if candidate.animal.species() != HIPPOPOTAMUS {
        return RuleOutcome::Skip;
    }
    RuleOutcome::from_pass(candidate.enclosure.biome().as_str() == SAVANNA_AND_RIVER)
}

/// Only current occupants count; the animals being introduced do not
fn check_monkey_companion(candidate: &Candidate<'_>) -> RuleOutcome {
    if candidate.animal.species() != MONKEY {
        return RuleOutcome::Skip;
    }
    RuleOutcome::from_pass(!candidate.enclosure.is_empty())
}

/// Charges the margin on top of the capacity rule's subtraction
fn check_mixed_species_margin(candidate: &Candidate<'_>) -> RuleOutcome {
    if !candidate.is_mixed() {
        return RuleOutcome::Skip;
    }
    let remaining = candidate.space_after_introduction() - MIXED_SPECIES_MARGIN;
    RuleOutcome::from_pass(remaining >= 0)
}
