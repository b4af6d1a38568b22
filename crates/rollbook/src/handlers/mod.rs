pub mod error;
pub mod health;
pub mod learners;

pub use error::AppError;
