//! Compatibility Evaluator
//!
//! Decides whether a group of animals can move into one enclosure.
//!
//! ## Rule order
//! 1. Capacity - enough free space for `unit_size × quantity`
//! 2. Biome - enclosure biome is one of the species' biomes (exact match)
//! 3. Exclusive carnivore - lions and leopards only live with their own kind
//! 4. Hippopotamus biome - hippos need `savanna-and-river`
//! 5. Monkey companion - monkeys need someone already there
//! 6. Mixed-species margin - one extra unit when species are mixed
//!
//! The first rule that denies rejects the placement.
//!
//! ## Architecture
//! - `rules.rs` - The ordered rule table and the candidate placement
//! - `assessment.rs` - Running the table, verdicts and rule traces

pub mod rules;
pub mod assessment;

pub use rules::{Candidate, Rule, RuleKind, RuleOutcome, RULES};
pub use assessment::{assess, is_admissible, Assessment, RuleCheck, Verdict};
