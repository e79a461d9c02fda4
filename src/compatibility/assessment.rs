//! Assessment Types
//!
//! Output of running the rule cascade against one enclosure: what each rule
//! answered and the final verdict.

use super::rules::{Candidate, RuleKind, RuleOutcome, RULES};
use crate::enclosure::Enclosure;
use crate::species::AnimalSpec;
use serde::Serialize;

/// Final decision for one enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "rule", rename_all = "snake_case")]
pub enum Verdict {
    Admitted,
    /// Rejected by the first rule that denied
    Rejected(RuleKind),
}

impl Verdict {
    pub fn display_text(&self) -> &'static str {
        match self {
            Verdict::Admitted => "Admitted",
            Verdict::Rejected(_) => "Rejected",
        }
    }
}

/// One rule's answer, as recorded in an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleCheck {
    pub rule: RuleKind,
    pub outcome: RuleOutcome,
}

/// Complete assessment of a candidate placement
///
/// `checks` holds every rule evaluated, stopping at the first denial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub enclosure_id: u32,
    pub checks: Vec<RuleCheck>,
    pub verdict: Verdict,
}

impl Assessment {
    pub fn is_admitted(&self) -> bool {
        self.verdict == Verdict::Admitted
    }

    /// Rule that rejected the placement, if any
    pub fn rejected_by(&self) -> Option<RuleKind> {
        match self.verdict {
            Verdict::Admitted => None,
            Verdict::Rejected(rule) => Some(rule),
        }
    }
}

/// Run the rule cascade for `quantity` animals of `animal` in `enclosure`
///
/// Pure: reads the enclosure's current occupants and nothing else.
/// `quantity` is expected to be positive; the query engine checks it.
pub fn assess(enclosure: &Enclosure, animal: &AnimalSpec, quantity: i64) -> Assessment {
    let candidate = Candidate::new(enclosure, animal, quantity);
    let mut checks = Vec::with_capacity(RULES.len());

    for rule in &RULES {
        let outcome = rule.check(&candidate);
        checks.push(RuleCheck { rule: rule.kind, outcome });

        if outcome == RuleOutcome::Deny {
            tracing::debug!(
                "Enclosure {} rejects {} x{}: {}",
                enclosure.id(),
                animal.species(),
                quantity,
                rule.kind.display_text()
            );
            return Assessment {
                enclosure_id: enclosure.id(),
                checks,
                verdict: Verdict::Rejected(rule.kind),
            };
        }
    }

    Assessment {
        enclosure_id: enclosure.id(),
        checks,
        verdict: Verdict::Admitted,
    }
}

/// Admission decision for `quantity` animals of `animal` in `enclosure`
pub fn is_admissible(enclosure: &Enclosure, animal: &AnimalSpec, quantity: i64) -> bool {
    assess(enclosure, animal, quantity).is_admitted()
}
