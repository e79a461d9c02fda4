use crate::explanation::types::EvaluationReport;
use serde_json;

/// JSON formatter for evaluation reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &EvaluationReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &EvaluationReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
