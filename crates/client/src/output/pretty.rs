//! Pretty output formatting.

use rollbook_core::health::HealthReport;
use rollbook_core::learner::Learner;

/// Format a learner for display.
pub fn format_learner(learner: &Learner) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Age: {}\n  Email: {}",
        learner.name, learner.id, learner.age, learner.email
    );
    if let Some(summary) = &learner.summary {
        output.push_str(&format!("\n  Summary: {}", summary));
    }
    output
}

/// Format learners for display, ordered by ID.
pub fn format_learners(learners: &[Learner]) -> String {
    if learners.is_empty() {
        return "No learners found.".to_string();
    }
    let mut sorted: Vec<&Learner> = learners.iter().collect();
    sorted.sort_by_key(|learner| learner.id);

    let mut output = format!("LEARNERS ({})\n", learners.len());
    output.push_str(&"-".repeat(40));
    for learner in sorted {
        output.push_str(&format!("\n{}", format_learner(learner)));
        output.push('\n');
    }
    output
}

/// Format a health report for display.
pub fn format_health(report: &HealthReport) -> String {
    format!(
        "Status: {}\n  Learners: {}\n  Version: {}",
        report.status, report.learners, report.version
    )
}
