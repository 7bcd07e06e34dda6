//! Student record and identifier types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StudentFields;

/// Server-assigned student identifier.
///
/// One deployment only ever produces one of the two forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    /// Small integer, one past the current maximum
    Sequential(u64),
    /// Opaque store-assigned id (ObjectId hex)
    Opaque(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Sequential(n) => write!(f, "{}", n),
            StudentId::Opaque(s) => f.write_str(s),
        }
    }
}

/// A stored student. Serializes flat: `{"id": .., "first_name": .., ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl Student {
    pub fn new(id: StudentId, fields: StudentFields) -> Self {
        Self { id, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> StudentFields {
        StudentFields::new("Jane", "Smith", "jane.smith@example.com", 22, "Physics")
    }

    #[test]
    fn test_sequential_student_serializes_flat() {
        let student = Student::new(StudentId::Sequential(1), jane());
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "first_name": "Jane",
                "last_name": "Smith",
                "email": "jane.smith@example.com",
                "age": 22,
                "major": "Physics"
            })
        );
    }

    #[test]
    fn test_opaque_id_serializes_as_string() {
        let student = Student::new(
            StudentId::Opaque("65f1c0ffee0000000000beef".to_string()),
            jane(),
        );
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["id"], "65f1c0ffee0000000000beef");
    }

    #[test]
    fn test_student_deserializes_both_id_forms() {
        let seq: Student = serde_json::from_value(json!({
            "id": 3, "first_name": "A", "last_name": "B",
            "email": "e", "age": 1, "major": "M"
        }))
        .unwrap();
        assert_eq!(seq.id, StudentId::Sequential(3));

        let opaque: Student = serde_json::from_value(json!({
            "id": "abc", "first_name": "A", "last_name": "B",
            "email": "e", "age": 1, "major": "M"
        }))
        .unwrap();
        assert_eq!(opaque.id, StudentId::Opaque("abc".to_string()));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(StudentId::Sequential(12).to_string(), "12");
        assert_eq!(StudentId::Opaque("x1".to_string()).to_string(), "x1");
    }
}
