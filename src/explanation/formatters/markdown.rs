use crate::compatibility::Verdict;
use crate::explanation::types::EvaluationReport;

/// Markdown formatter for evaluation reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &EvaluationReport) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!(
            "# Placement of {} × {}\n\n",
            report.quantity, report.species
        ));
        md.push_str(&format!(
            "**Space needed:** {} ({} per animal)  \n",
            report.space_needed, report.unit_size
        ));
        md.push_str(&format!(
            "**Biomes:** {}\n\n",
            report.compatible_biomes.join(", ")
        ));

        md.push_str("## Result\n\n");
        match (&report.response.viable_enclosures, &report.response.error) {
            (Some(viable), _) => {
                for descriptor in viable {
                    md.push_str(&format!("- {}\n", descriptor));
                }
            }
            (None, Some(error)) => md.push_str(&format!("⚠️ {}\n", error)),
            (None, None) => {}
        }
        md.push('\n');

        md.push_str("## Enclosures\n\n");
        md.push_str("| Enclosure | Biome | Free / Total | Occupants | Verdict | Reason |\n");
        md.push_str("|-----------|-------|--------------|-----------|---------|--------|\n");
        for enclosure in &report.enclosures {
            let occupants = if enclosure.occupants.is_empty() {
                "-".to_string()
            } else {
                enclosure.occupants.join(", ")
            };
            let verdict = match enclosure.verdict {
                Verdict::Admitted => "✅ Admitted".to_string(),
                Verdict::Rejected(rule) => format!("❌ {}", rule.display_text()),
            };

            md.push_str(&format!(
                "| {} | {} | {} / {} | {} | {} | {} |\n",
                enclosure.id,
                enclosure.biome,
                enclosure.free_space,
                enclosure.total_capacity,
                occupants,
                verdict,
                enclosure.reason.as_deref().unwrap_or(""),
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::ExplanationGenerator;
    use crate::sample::sample_engine;

    #[test]
    fn test_format_markdown() {
        let engine = sample_engine().unwrap();
        let report = ExplanationGenerator::generate(&engine, "monkey", 2).unwrap();
        let md = MarkdownFormatter::format(&report);

        assert!(md.starts_with("# Placement of 2 × monkey\n"));
        assert!(md.contains("- Enclosure 1 (free space: 9 total: 10)\n"));
        assert!(md.contains("- Enclosure 5 (free space: 6 total: 9)\n"));
        assert!(md.contains("| 2 | forest | 5 / 5 | - | ❌ Monkey companion |"));
        assert!(md.contains("| 1 | savanna | 9 / 10 | monkey | ✅ Admitted |  |"));
    }

    #[test]
    fn test_format_markdown_error() {
        let engine = sample_engine().unwrap();
        let report = ExplanationGenerator::generate(&engine, "leopard", 2).unwrap();
        let md = MarkdownFormatter::format(&report);

        assert!(md.contains("⚠️ No viable enclosure"));
        assert!(md.contains("❌ Exclusive carnivore"));
    }
}
