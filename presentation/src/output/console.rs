//! Console output formatting for enrichment results

use colored::Colorize;
use duet_domain::EnrichedTable;
use duet_domain::util::truncate_str;

/// Maximum cell width in the preview rendering.
const PREVIEW_CELL_WIDTH: usize = 24;

/// Formats enrichment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One-paragraph run summary with per-outcome counts.
    pub fn format_summary(enriched: &EnrichedTable) -> String {
        let (valid, invalid, error) = enriched.outcome_counts();
        let total = enriched.row_count();
        format!(
            "{} {} rows: {} {}, {} {}, {} {}",
            "Enriched".bold(),
            total,
            valid.to_string().green().bold(),
            "valid",
            invalid.to_string().yellow().bold(),
            "invalid",
            error.to_string().red().bold(),
            "error"
        )
    }

    /// Render the first `max_rows` rows as a plain-text preview.
    pub fn format_preview(enriched: &EnrichedTable, max_rows: usize) -> String {
        let table = enriched.table();
        let mut lines = Vec::new();

        lines.push(
            table
                .columns()
                .iter()
                .map(|name| truncate_str(name, PREVIEW_CELL_WIDTH).to_string())
                .collect::<Vec<_>>()
                .join(" | "),
        );

        for row in table.rows().iter().take(max_rows) {
            lines.push(
                row.fields()
                    .iter()
                    .map(|(_, value)| {
                        truncate_str(&value.to_string(), PREVIEW_CELL_WIDTH).to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(" | "),
            );
        }

        if table.row_count() > max_rows {
            lines.push(format!("… {} more rows", table.row_count() - max_rows));
        }

        lines.join("\n")
    }
}
