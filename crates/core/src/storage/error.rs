use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RepositoryError {
    /// Shorthand for a missing learner.
    pub fn learner_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Learner",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Learner",
            id: "999".to_string(),
        };
        assert_eq!(error.to_string(), "Learner not found: 999");
    }

    #[test]
    fn test_learner_not_found_shorthand() {
        assert_eq!(
            RepositoryError::learner_not_found(5),
            RepositoryError::NotFound {
                entity_type: "Learner",
                id: "5".to_string(),
            }
        );
    }

    #[test]
    fn test_repository_error_invalid_argument_display() {
        let error = RepositoryError::InvalidArgument("learner id must be an integer".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid argument: learner id must be an integer"
        );
    }
}
