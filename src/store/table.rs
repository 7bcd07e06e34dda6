//! Student Table Module
//!
//! In-memory student storage: an insertion-ordered list plus the id
//! strategy used to number new records.

use std::sync::Arc;

use crate::error::{RegistryError, Result};
use crate::models::{Student, StudentFields, StudentId};
use crate::store::{IdStrategy, SequentialIds};

// == Student Table ==
/// Ephemeral student storage, in insertion order.
#[derive(Debug)]
pub struct StudentTable {
    /// Stored students
    records: Vec<Student>,
    /// Id assignment rule
    ids: Arc<dyn IdStrategy>,
}

impl Default for StudentTable {
    fn default() -> Self {
        Self::new(Arc::new(SequentialIds))
    }
}

impl StudentTable {
    // == Constructor ==
    /// Creates an empty table that numbers records with `ids`.
    pub fn new(ids: Arc<dyn IdStrategy>) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    /// Adds the sample student the service has always shipped with.
    pub fn with_sample(mut self) -> Self {
        self.insert(sample_student());
        self
    }

    /// Returns the id strategy, shared with callers that parse ids
    /// without holding the table.
    pub fn id_strategy(&self) -> Arc<dyn IdStrategy> {
        Arc::clone(&self.ids)
    }

    // == Insert ==
    /// Assigns an id to `fields`, stores the record and returns it.
    pub fn insert(&mut self, fields: StudentFields) -> Student {
        let id = self.ids.assign(&self.records);
        let student = Student::new(id, fields);
        self.records.push(student.clone());
        student
    }

    // == All ==
    /// Returns every student in insertion order.
    pub fn all(&self) -> &[Student] {
        &self.records
    }

    // == Get ==
    pub fn get(&self, id: &StudentId) -> Result<&Student> {
        self.records
            .iter()
            .find(|student| &student.id == id)
            .ok_or_else(|| RegistryError::not_found(id))
    }

    // == Replace ==
    /// Overwrites every data field of the matching student. The id stays.
    pub fn replace(&mut self, id: &StudentId, fields: StudentFields) -> Result<&Student> {
        let student = self
            .records
            .iter_mut()
            .find(|student| &student.id == id)
            .ok_or_else(|| RegistryError::not_found(id))?;
        student.fields = fields;
        Ok(&*student)
    }

    // == Remove ==
    pub fn remove(&mut self, id: &StudentId) -> Result<Student> {
        let index = self
            .records
            .iter()
            .position(|student| &student.id == id)
            .ok_or_else(|| RegistryError::not_found(id))?;
        Ok(self.records.remove(index))
    }

    // == Length ==
    /// Returns the current number of students.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if no students are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn sample_student() -> StudentFields {
    StudentFields::new(
        "John",
        "Doe",
        "john.doe@example.com",
        21,
        "Computer Science",
    )
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ObjectIds;

    fn jane() -> StudentFields {
        StudentFields::new("Jane", "Smith", "jane.smith@example.com", 22, "Physics")
    }

    fn bob() -> StudentFields {
        StudentFields::new("Bob", "Stone", "bob@example.com", 30, "History")
    }

    #[test]
    fn test_table_new() {
        let table = StudentTable::default();
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut table = StudentTable::default();

        let first = table.insert(jane());
        let second = table.insert(bob());

        assert_eq!(first.id, StudentId::Sequential(1));
        assert_eq!(first.fields, jane());
        assert_eq!(second.id, StudentId::Sequential(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_returns_inserted() {
        let mut table = StudentTable::default();
        let created = table.insert(jane());

        assert_eq!(table.get(&created.id).unwrap(), &created);
    }

    #[test]
    fn test_get_nonexistent() {
        let table = StudentTable::default();

        let result = table.get(&StudentId::Sequential(1));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn test_replace_is_full_overwrite() {
        let mut table = StudentTable::default();
        let created = table.insert(jane());

        let updated = table.replace(&created.id, bob()).unwrap().clone();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields, bob());
        assert_eq!(table.get(&created.id).unwrap().fields, bob());
    }

    #[test]
    fn test_replace_nonexistent() {
        let mut table = StudentTable::default();

        let result = table.replace(&StudentId::Sequential(9), jane());
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn test_remove() {
        let mut table = StudentTable::default();
        let created = table.insert(jane());

        let removed = table.remove(&created.id).unwrap();

        assert_eq!(removed, created);
        assert!(table.is_empty());
        assert!(matches!(
            table.get(&created.id),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_nonexistent() {
        let mut table = StudentTable::default();

        let result = table.remove(&StudentId::Sequential(1));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn test_jane_then_delete_scenario() {
        let mut table = StudentTable::default();

        assert_eq!(table.insert(jane()).id, StudentId::Sequential(1));
        assert_eq!(table.insert(bob()).id, StudentId::Sequential(2));

        table.remove(&StudentId::Sequential(1)).unwrap();

        assert!(table.get(&StudentId::Sequential(1)).is_err());
        assert_eq!(table.all().len(), 1);
        assert_eq!(table.all()[0].id, StudentId::Sequential(2));
    }

    #[test]
    fn test_deleting_highest_id_frees_it() {
        let mut table = StudentTable::default();
        table.insert(jane());
        let second = table.insert(bob());

        table.remove(&second.id).unwrap();

        assert_eq!(table.insert(bob()).id, StudentId::Sequential(2));
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let mut table = StudentTable::default();
        table.insert(bob());
        table.insert(jane());

        let names: Vec<&str> = table
            .all()
            .iter()
            .map(|s| s.fields.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob", "Jane"]);
    }

    #[test]
    fn test_with_sample() {
        let table = StudentTable::default().with_sample();

        let sample = table.get(&StudentId::Sequential(1)).unwrap();
        assert_eq!(sample.fields.first_name, "John");
        assert_eq!(sample.fields.major, "Computer Science");
    }

    #[test]
    fn test_id_strategy_is_shared() {
        let table = StudentTable::default();
        let ids = table.id_strategy();
        assert_eq!(ids.parse("3"), Some(StudentId::Sequential(3)));
        assert_eq!(ids.parse("three"), None);
    }

    #[test]
    fn test_object_id_table() {
        let mut table = StudentTable::new(Arc::new(ObjectIds));
        let created = table.insert(jane());

        let parsed = table.id_strategy().parse(&created.id.to_string()).unwrap();
        assert_eq!(table.get(&parsed).unwrap(), &created);
        assert!(table.get(&StudentId::Sequential(1)).is_err());
    }
}
