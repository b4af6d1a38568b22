//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use rollbook_core::learner::{generate_summary, Learner, LearnerId, LearnerInput};
use rollbook_core::storage::{LearnerRepository, RepositoryError, Result};

/// First ID handed out by a fresh repository.
const FIRST_LEARNER_ID: LearnerId = 1;

/// Learner records plus the next ID to assign.
///
/// Kept together so a single lock covers both.
#[derive(Debug)]
struct LearnerTable {
    learners: HashMap<LearnerId, Learner>,
    next_id: LearnerId,
}

/// In-memory learner storage.
///
/// Cloning is cheap and every clone shares the same table. Data is not
/// persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table: Arc<Mutex<LearnerTable>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(LearnerTable {
                learners: HashMap::new(),
                next_id: FIRST_LEARNER_ID,
            })),
        }
    }
}

#[async_trait]
impl LearnerRepository for InMemoryRepository {
    async fn create_learner(&self, input: LearnerInput) -> Result<Learner> {
        let mut table = self.table.lock().await;
        let id = table.next_id;
        table.next_id += 1;

        let learner = Learner::new(id, input);
        table.learners.insert(id, learner.clone());
        Ok(learner)
    }

    async fn list_learners(&self) -> Result<Vec<Learner>> {
        let table = self.table.lock().await;
        Ok(table.learners.values().cloned().collect())
    }

    async fn get_learner(&self, id: LearnerId) -> Result<Learner> {
        let table = self.table.lock().await;
        table
            .learners
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::learner_not_found(id))
    }

    async fn get_learner_summary(&self, id: LearnerId) -> Result<String> {
        // Held across check, compute and write-back.
        let mut table = self.table.lock().await;
        let learner = table
            .learners
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::learner_not_found(id))?;

        match &learner.summary {
            Some(summary) => Ok(summary.clone()),
            None => {
                let summary = generate_summary(learner);
                learner.summary = Some(summary.clone());
                tracing::debug!(learner_id = id, "Cached learner summary");
                Ok(summary)
            }
        }
    }

    async fn update_learner(&self, id: LearnerId, input: LearnerInput) -> Result<Learner> {
        let mut table = self.table.lock().await;
        let learner = table
            .learners
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::learner_not_found(id))?;

        learner.replace(input);
        Ok(learner.clone())
    }

    async fn delete_learner(&self, id: LearnerId) -> Result<()> {
        let mut table = self.table.lock().await;
        if table.learners.remove(&id).is_none() {
            return Err(RepositoryError::learner_not_found(id));
        }
        Ok(())
    }

    async fn count_learners(&self) -> Result<usize> {
        let table = self.table.lock().await;
        Ok(table.learners.len())
    }
}
