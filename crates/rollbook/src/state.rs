//! Application state shared by all request handlers.
//!
//! The store is constructed once at startup and handed to every handler as a
//! repository trait object, so handlers never touch global state.

use std::sync::Arc;

use rollbook_core::storage::LearnerRepository;

use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler; clones share the same repository.
#[derive(Clone)]
pub struct AppState {
    /// Learner repository.
    pub learner_repo: Arc<dyn LearnerRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(learner_repo: Arc<dyn LearnerRepository>) -> Self {
        Self { learner_repo }
    }
}

impl Default for AppState {
    /// An empty in-memory store.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
