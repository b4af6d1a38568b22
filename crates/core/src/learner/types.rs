use serde::{Deserialize, Serialize};

/// Identifier assigned to a learner by the store.
pub type LearnerId = i64;

/// A registered learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learner {
    pub id: LearnerId,
    pub name: String,
    pub age: i64,
    pub email: String,
    /// Cached summary. `None` until the summary is first requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Learner {
    /// Creates a learner with the given ID from caller-supplied fields.
    ///
    /// The summary always starts unset.
    pub fn new(id: LearnerId, input: LearnerInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            email: input.email,
            summary: None,
        }
    }

    /// Replaces every mutable field, keeping the ID and clearing the summary.
    pub fn replace(&mut self, input: LearnerInput) {
        *self = Self::new(self.id, input);
    }
}

/// Fields a caller supplies when registering or updating a learner.
///
/// Missing fields fall back to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerInput {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl LearnerInput {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

/// Body returned by the summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerSummary {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> LearnerInput {
        LearnerInput::new("Ada", 30, "ada@x.com")
    }

    #[test]
    fn test_new_learner_has_no_summary() {
        let learner = Learner::new(1, ada());

        assert_eq!(learner.id, 1);
        assert_eq!(learner.name, "Ada");
        assert!(learner.summary.is_none());
    }

    #[test]
    fn test_replace_keeps_id_and_clears_summary() {
        let mut learner = Learner::new(7, ada());
        learner.summary = Some("cached".to_string());

        learner.replace(LearnerInput::new("Ada L.", 31, "ada@x.com"));

        assert_eq!(learner.id, 7);
        assert_eq!(learner.name, "Ada L.");
        assert_eq!(learner.age, 31);
        assert_eq!(learner.summary, None);
    }

    #[test]
    fn test_unset_summary_is_omitted_from_json() {
        let learner = Learner::new(1, ada());
        let json = serde_json::to_value(&learner).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ada", "age": 30, "email": "ada@x.com"})
        );
    }

    #[test]
    fn test_cached_summary_is_serialized() {
        let mut learner = Learner::new(1, ada());
        learner.summary = Some("Learner Ada, Age: 30, Contact: ada@x.com".to_string());
        let json = serde_json::to_value(&learner).unwrap();

        assert_eq!(json["summary"], "Learner Ada, Age: 30, Contact: ada@x.com");
    }

    #[test]
    fn test_input_defaults_missing_fields() {
        let input: LearnerInput = serde_json::from_str(r#"{"name": "Bo"}"#).unwrap();

        assert_eq!(input, LearnerInput::new("Bo", 0, ""));
    }
}
