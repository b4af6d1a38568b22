use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use serde_json::Value;

use crate::storage::RepositoryError;

use super::types::{Learner, LearnerId, LearnerInput};

/// Builds the summary line for a learner from its profile fields.
///
/// The result depends only on `name`, `age` and `email`.
pub fn generate_summary(learner: &Learner) -> String {
    format!(
        "Learner {}, Age: {}, Contact: {}",
        learner.name, learner.age, learner.email
    )
}

/// Parses a learner ID taken from a request path.
///
/// Any signed integer is accepted; negative or zero IDs are well formed and
/// simply never match a stored learner.
pub fn parse_learner_id(raw: &str) -> Result<LearnerId, RepositoryError> {
    raw.parse::<LearnerId>().map_err(|_| {
        RepositoryError::InvalidArgument(format!("learner id must be an integer, got {raw:?}"))
    })
}

/// Decodes a create/update request body without ever rejecting it.
///
/// Only the first JSON value in the body is read. When it is not an object
/// every field is left at its zero value. Inside an object, keys match the
/// field names case-insensitively (Unicode lowercase) and members apply in
/// document order, so the last matching key wins. A member whose value has
/// the wrong type is skipped and leaves any earlier value in place.
pub fn decode_learner_input(body: &[u8]) -> LearnerInput {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<ObjectMembers>()
        .next();

    let Some(Ok(ObjectMembers(members))) = first else {
        return LearnerInput::default();
    };

    let mut input = LearnerInput::default();
    for (key, value) in members {
        match key.to_lowercase().as_str() {
            "name" => {
                if let Value::String(name) = value {
                    input.name = name;
                }
            }
            "age" => {
                if let Some(age) = value.as_i64() {
                    input.age = age;
                }
            }
            "email" => {
                if let Value::String(email) = value {
                    input.email = email;
                }
            }
            _ => {}
        }
    }
    input
}

/// Members of a JSON object in document order, duplicate keys included.
struct ObjectMembers(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for ObjectMembers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = ObjectMembers;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::new();
                while let Some(member) = map.next_entry::<String, Value>()? {
                    members.push(member);
                }
                Ok(ObjectMembers(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}
