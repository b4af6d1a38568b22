//! Learner API operations.

use super::RollbookClient;
use crate::error::Result;
use rollbook_core::learner::{Learner, LearnerId, LearnerInput, LearnerSummary};

impl RollbookClient {
    /// List all learners.
    pub async fn list_learners(&self) -> Result<Vec<Learner>> {
        let response = self.client.get(self.url("/learners")).send().await?;
        self.handle_response(response, "learners").await
    }

    /// Register a new learner.
    pub async fn create_learner(&self, input: &LearnerInput) -> Result<Learner> {
        let response = self
            .client
            .post(self.url("/learners"))
            .json(input)
            .send()
            .await?;
        self.handle_response(response, "learners").await
    }

    /// Get learner by ID.
    pub async fn get_learner(&self, id: LearnerId) -> Result<Learner> {
        let response = self
            .client
            .get(self.url(&format!("/learners/{id}")))
            .send()
            .await?;
        self.handle_response(response, &format!("learner {id}")).await
    }

    /// Replace a learner's fields.
    pub async fn update_learner(&self, id: LearnerId, input: &LearnerInput) -> Result<Learner> {
        let response = self
            .client
            .put(self.url(&format!("/learners/{id}")))
            .json(input)
            .send()
            .await?;
        self.handle_response(response, &format!("learner {id}")).await
    }

    /// Delete learner by ID.
    pub async fn delete_learner(&self, id: LearnerId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/learners/{id}")))
            .send()
            .await?;
        self.handle_empty_response(response, &format!("learner {id}"))
            .await
    }

    /// Get a learner's summary.
    pub async fn get_learner_summary(&self, id: LearnerId) -> Result<String> {
        let response = self
            .client
            .get(self.url(&format!("/learners/summary/{id}")))
            .send()
            .await?;
        let summary: LearnerSummary = self
            .handle_response(response, &format!("learner {id}"))
            .await?;
        Ok(summary.summary)
    }
}
