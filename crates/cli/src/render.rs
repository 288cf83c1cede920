//! Terminal rendering helpers

use colored::Colorize;
use evalboard_core::application::{format_transcript, LogSummary, Segment, Verdict};
use evalboard_core::domain::PromptExchange;
use tabled::Tabled;

pub const NO_RESULTS: &str =
    "No results found. Select another result or date, or reset the filters to see the latest run.";

/// `850 ms`, `1.52 s`, or `-` when unknown
pub fn format_ms(ms: Option<f64>) -> String {
    match ms {
        None => "-".to_string(),
        Some(ms) if ms >= 1000.0 => format!("{:.2} s", ms / 1000.0),
        Some(ms) => format!("{:.0} ms", ms),
    }
}

pub fn verdict_tag(verdict: Verdict) -> String {
    match verdict {
        Verdict::Recommended => "Recommended".green().bold().to_string(),
        Verdict::Trailing | Verdict::Unscored => String::new(),
    }
}

pub fn render_segments(text: &str) -> String {
    format_transcript(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text,
            Segment::Code { language, body } => {
                let fence = format!("```{}", language.unwrap_or_default());
                format!("{}\n{}\n{}", fence.dimmed(), body.cyan(), "```".dimmed())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print exchanges numbered from `first_number`
pub fn print_exchanges(exchanges: &[PromptExchange], first_number: usize) {
    if exchanges.is_empty() {
        println!("{}", NO_RESULTS.yellow());
        return;
    }

    for (offset, exchange) in exchanges.iter().enumerate() {
        println!(
            "{} {}",
            format!("Question {}", first_number + offset).bold(),
            format!("({})", format_ms(exchange.time)).dimmed()
        );
        println!("{}", "User".blue().bold());
        println!("{}", render_segments(&exchange.user));
        println!("{}", "Assistant".magenta().bold());
        println!("{}", render_segments(&exchange.assistant));
        println!();
    }
}

#[derive(Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub fn summary_rows(summary: &LogSummary) -> Vec<SummaryRow> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    vec![
        row("Lines", summary.lines.to_string()),
        row("Errors", summary.errors.to_string()),
        row("Warnings", summary.warnings.to_string()),
        row("Version", opt(&summary.version)),
        row("Listening on", opt(&summary.listen_address)),
        row("First entry", opt(&summary.first_timestamp)),
        row("Last entry", opt(&summary.last_timestamp)),
        row("Responses", summary.response_times_ms.len().to_string()),
        row("Mean response", format_ms(summary.mean_response_ms())),
        row(
            "Total response",
            if summary.response_times_ms.is_empty() {
                "-".to_string()
            } else {
                format_ms(Some(summary.total_response_ms()))
            },
        ),
    ]
}

fn row(field: &str, value: String) -> SummaryRow {
    SummaryRow {
        field: field.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(None), "-");
        assert_eq!(format_ms(Some(850.4)), "850 ms");
        assert_eq!(format_ms(Some(1523.4)), "1.52 s");
    }

    #[test]
    fn test_render_segments_keeps_text_and_code() {
        colored::control::set_override(false);
        let out = render_segments("<assistant>Try:\n```sh\nls\n```</assistant>");
        assert_eq!(out, "Try:\n```sh\nls\n```");
    }

    #[test]
    fn test_summary_rows_for_empty_log() {
        let rows = summary_rows(&LogSummary::default());
        let total = rows.iter().find(|r| r.field == "Total response").unwrap();
        assert_eq!(total.value, "-");
        assert_eq!(rows[0].value, "0");
    }
}
