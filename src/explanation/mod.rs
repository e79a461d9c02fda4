pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{EnclosureExplanation, EvaluationReport};
pub use generator::ExplanationGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
