use serde::{Deserialize, Serialize};

/// Body returned by `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    /// Number of learners currently stored.
    pub learners: usize,
    pub version: String,
}

impl HealthReport {
    /// Creates a healthy report for the given learner count.
    pub fn ok(learners: usize, version: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            learners,
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_report_serialization() {
        let report = HealthReport::ok(3, "0.0.0");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "learners": 3, "version": "0.0.0"})
        );
    }
}
