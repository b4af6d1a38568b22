mod functions;
mod types;

pub use functions::{decode_learner_input, generate_summary, parse_learner_id};
pub use types::{Learner, LearnerId, LearnerInput, LearnerSummary};
