use async_trait::async_trait;

use crate::learner::{Learner, LearnerId, LearnerInput};

use super::Result;

/// Repository for learner operations.
///
/// Implementations must make every method atomic with respect to the others.
/// In particular `get_learner_summary` checks, computes and caches the summary
/// as one step so a concurrent update can never be overwritten by a stale
/// summary.
#[async_trait]
pub trait LearnerRepository: Send + Sync {
    /// Registers a learner under the next unused ID and returns the stored record.
    async fn create_learner(&self, input: LearnerInput) -> Result<Learner>;

    /// Lists every stored learner, in no particular order.
    async fn list_learners(&self) -> Result<Vec<Learner>>;

    /// Gets a learner by its ID.
    async fn get_learner(&self, id: LearnerId) -> Result<Learner>;

    /// Returns the learner's summary, computing and caching it on first access.
    async fn get_learner_summary(&self, id: LearnerId) -> Result<String>;

    /// Replaces a learner's fields, keeping its ID and clearing its summary.
    async fn update_learner(&self, id: LearnerId, input: LearnerInput) -> Result<Learner>;

    /// Deletes a learner by its ID. The ID is never handed out again.
    async fn delete_learner(&self, id: LearnerId) -> Result<()>;

    /// Counts the stored learners.
    async fn count_learners(&self) -> Result<usize>;
}
