//! Identifier Strategies
//!
//! Decides how a new student gets its id and how a raw id from a request
//! path is read back. A deployment picks one strategy and keeps it.

use std::fmt;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::config::IdKind;
use crate::models::{Student, StudentId};

// == Id Strategy ==
/// Assigns ids to new students and parses ids coming from clients.
pub trait IdStrategy: fmt::Debug + Send + Sync {
    /// Returns the id for a student about to be inserted into `existing`.
    fn assign(&self, existing: &[Student]) -> StudentId;

    /// Parses a raw id. `None` means the text can never name a student
    /// under this strategy.
    fn parse(&self, raw: &str) -> Option<StudentId>;
}

/// Small integers, one past the current maximum (1 for an empty collection).
///
/// Ids freed by deleting the highest record are handed out again.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIds;

impl IdStrategy for SequentialIds {
    fn assign(&self, existing: &[Student]) -> StudentId {
        let max = existing
            .iter()
            .filter_map(|student| match student.id {
                StudentId::Sequential(n) => Some(n),
                StudentId::Opaque(_) => None,
            })
            .max()
            .unwrap_or(0);
        StudentId::Sequential(max + 1)
    }

    fn parse(&self, raw: &str) -> Option<StudentId> {
        raw.parse().ok().map(StudentId::Sequential)
    }
}

/// Opaque ObjectId hex strings, the same shape MongoDB assigns.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectIds;

impl IdStrategy for ObjectIds {
    fn assign(&self, _existing: &[Student]) -> StudentId {
        StudentId::Opaque(ObjectId::new().to_hex())
    }

    fn parse(&self, raw: &str) -> Option<StudentId> {
        ObjectId::parse_str(raw)
            .ok()
            .map(|oid| StudentId::Opaque(oid.to_hex()))
    }
}

/// Builds the strategy selected by configuration.
pub fn strategy_for(kind: IdKind) -> Arc<dyn IdStrategy> {
    match kind {
        IdKind::Sequential => Arc::new(SequentialIds),
        IdKind::ObjectId => Arc::new(ObjectIds),
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentFields;

    fn student(id: StudentId) -> Student {
        Student::new(id, StudentFields::new("A", "B", "a@b", 20, "Art"))
    }

    #[test]
    fn test_sequential_starts_at_one() {
        assert_eq!(SequentialIds.assign(&[]), StudentId::Sequential(1));
    }

    #[test]
    fn test_sequential_is_max_plus_one() {
        let existing = vec![
            student(StudentId::Sequential(4)),
            student(StudentId::Sequential(2)),
        ];
        assert_eq!(SequentialIds.assign(&existing), StudentId::Sequential(5));
    }

    #[test]
    fn test_sequential_parse() {
        assert_eq!(SequentialIds.parse("17"), Some(StudentId::Sequential(17)));
        assert_eq!(SequentialIds.parse("abc"), None);
        assert_eq!(SequentialIds.parse("-1"), None);
    }

    #[test]
    fn test_object_ids_are_unique() {
        let a = ObjectIds.assign(&[]);
        let b = ObjectIds.assign(&[]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_id_parse_roundtrip() {
        let id = ObjectIds.assign(&[]);
        assert_eq!(ObjectIds.parse(&id.to_string()), Some(id));
        assert_eq!(ObjectIds.parse("1"), None);
    }

    #[test]
    fn test_strategy_for_kind() {
        let ids = strategy_for(IdKind::Sequential);
        assert_eq!(ids.assign(&[]), StudentId::Sequential(1));

        let ids = strategy_for(IdKind::ObjectId);
        assert!(matches!(ids.assign(&[]), StudentId::Opaque(_)));
    }
}
