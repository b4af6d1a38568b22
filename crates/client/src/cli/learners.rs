//! Learner CLI commands.

use clap::{Args, Parser, Subcommand};

use rollbook_core::learner::{LearnerId, LearnerInput};

/// Learner management commands.
#[derive(Debug, Parser)]
pub struct LearnersCommand {
    #[command(subcommand)]
    pub action: LearnersAction,
}

/// Available learner actions.
#[derive(Debug, Subcommand)]
pub enum LearnersAction {
    /// List all learners.
    List,
    /// Register a new learner.
    Create(LearnerFields),
    /// Get learner by ID.
    Get {
        /// Learner ID.
        id: LearnerId,
    },
    /// Replace a learner's fields.
    Update {
        /// Learner ID.
        id: LearnerId,
        #[command(flatten)]
        fields: LearnerFields,
    },
    /// Delete learner by ID.
    Delete {
        /// Learner ID.
        id: LearnerId,
    },
    /// Show (and cache) a learner's summary.
    Summary {
        /// Learner ID.
        id: LearnerId,
    },
}

/// Fields sent on create and update. Omitted flags send zero values.
#[derive(Debug, Args)]
pub struct LearnerFields {
    /// Learner name.
    #[arg(long, default_value = "")]
    pub name: String,
    /// Learner age.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub age: i64,
    /// Contact email.
    #[arg(long, default_value = "")]
    pub email: String,
}

impl From<LearnerFields> for LearnerInput {
    fn from(fields: LearnerFields) -> Self {
        LearnerInput::new(fields.name, fields.age, fields.email)
    }
}
