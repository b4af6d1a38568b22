//! In-memory storage backend.
//!
//! All learners and the ID counter live in a single `HashMap` guarded by one
//! `tokio::sync::Mutex`. Every operation takes that lock exactly once.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let ada = repo.create_learner(LearnerInput::new("Ada", 30, "ada@x.com")).await?;
//! assert_eq!(ada.id, 1);
//! ```

mod repository;

pub use repository::InMemoryRepository;
