//! Demo learners for local development.

use rollbook_core::learner::LearnerInput;
use rollbook_core::storage::{LearnerRepository, Result};

/// Sample learners registered when the server starts with demo data.
pub fn demo_learners() -> Vec<LearnerInput> {
    vec![
        LearnerInput::new("Ada Lovelace", 36, "ada@example.com"),
        LearnerInput::new("Alan Turing", 41, "alan@example.com"),
        LearnerInput::new("Grace Hopper", 85, "grace@example.com"),
        LearnerInput::new("Katherine Johnson", 101, "katherine@example.com"),
        LearnerInput::new("Edsger Dijkstra", 72, "edsger@example.com"),
    ]
}

/// Registers the demo learners through the normal create path.
///
/// They take the next IDs in sequence like any other learner. Returns how
/// many were created.
pub async fn seed_demo_learners(repo: &dyn LearnerRepository) -> Result<usize> {
    let learners = demo_learners();
    let count = learners.len();

    for input in learners {
        let learner = repo.create_learner(input).await?;
        tracing::debug!(learner_id = learner.id, name = %learner.name, "Seeded demo learner");
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;

    #[tokio::test]
    async fn test_seed_demo_learners_fills_empty_store() {
        let repo = InMemoryRepository::new();

        let seeded = seed_demo_learners(&repo).await.unwrap();

        assert_eq!(seeded, demo_learners().len());
        assert_eq!(repo.count_learners().await.unwrap(), seeded);
        assert_eq!(repo.get_learner(1).await.unwrap().name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_seeded_learners_consume_ids() {
        let repo = InMemoryRepository::new();
        let seeded = seed_demo_learners(&repo).await.unwrap();

        let next = repo
            .create_learner(LearnerInput::new("New", 20, "new@example.com"))
            .await
            .unwrap();

        assert_eq!(next.id, seeded as i64 + 1);
    }
}
