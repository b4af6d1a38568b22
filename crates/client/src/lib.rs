//! rollbook_client - CLI client for rollbook API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RollbookClient;
pub use error::{ClientError, Result};
