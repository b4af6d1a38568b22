//! rollbook_core - pure domain logic for the rollbook learner registry.
//!
//! Nothing in this crate performs I/O. The server crate supplies the
//! storage backend and the HTTP surface.

pub mod health;
pub mod learner;
pub mod storage;
