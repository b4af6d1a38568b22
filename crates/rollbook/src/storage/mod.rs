//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `rollbook_core::storage`. Only the in-memory backend exists;
//! nothing survives a restart.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
