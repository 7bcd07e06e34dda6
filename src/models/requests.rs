//! Request DTOs for the student registry API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Data attributes of a student, as sent to POST /students and
/// PUT /students/{id}.
///
/// All five fields are required. The id is never part of the body; an `id`
/// key sent by a client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    /// Free text, no format or uniqueness checks
    pub email: String,
    /// Accepts a JSON integer or a numeric string
    #[serde(deserialize_with = "coerce_age")]
    pub age: i64,
    pub major: String,
}

impl StudentFields {
    /// Creates a new set of student fields
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
        major: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            age,
            major: major.into(),
        }
    }
}

fn coerce_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(AgeVisitor)
}

struct AgeVisitor;

impl<'de> de::Visitor<'de> for AgeVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string holding an integer")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value)
            .map_err(|_| E::custom(format!("age {} is out of range", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        value
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("age must be an integer, got '{}'", value)))
    }
}
