//! Output formatting functions.
//!
//! Each `render_*` function picks between compact JSON and the pretty
//! formatters based on the `--format` flag.

pub mod pretty;

use serde::Serialize;

use rollbook_core::health::HealthReport;
use rollbook_core::learner::{Learner, LearnerSummary};

use crate::cli::OutputFormat;

/// Format a value as compact JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Render a single learner.
pub fn render_learner(learner: &Learner, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(learner),
        OutputFormat::Pretty => pretty::format_learner(learner),
    }
}

/// Render a list of learners.
pub fn render_learners(learners: &[Learner], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&learners),
        OutputFormat::Pretty => pretty::format_learners(learners),
    }
}

/// Render a summary exactly as the server returned it (JSON) or as bare text.
pub fn render_summary(summary: String, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&LearnerSummary { summary }),
        OutputFormat::Pretty => summary,
    }
}

/// Render a health report.
pub fn render_health(report: &HealthReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(report),
        OutputFormat::Pretty => pretty::format_health(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_core::learner::LearnerInput;

    #[test]
    fn test_render_learner_json_is_compact() {
        let learner = Learner::new(1, LearnerInput::new("Ada", 30, "ada@x.com"));

        assert_eq!(
            render_learner(&learner, OutputFormat::Json),
            r#"{"id":1,"name":"Ada","age":30,"email":"ada@x.com"}"#
        );
    }

    #[test]
    fn test_render_summary_formats() {
        let summary = "Learner Ada, Age: 30, Contact: ada@x.com".to_string();

        assert_eq!(
            render_summary(summary.clone(), OutputFormat::Json),
            r#"{"summary":"Learner Ada, Age: 30, Contact: ada@x.com"}"#
        );
        assert_eq!(render_summary(summary.clone(), OutputFormat::Pretty), summary);
    }

    #[test]
    fn test_render_empty_list_json() {
        assert_eq!(render_learners(&[], OutputFormat::Json), "[]");
    }
}
