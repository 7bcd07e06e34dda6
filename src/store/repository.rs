//! Student Repository Contract
//!
//! The five CRUD operations every storage backend provides.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Student, StudentFields, StudentId};

/// Storage backend for student records.
///
/// Each call is a single step over the current collection; nothing spans
/// two calls. A missing record is always `RegistryError::NotFound`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Reads an id from a request path. Text that cannot be an id for this
    /// backend is reported as not found.
    fn parse_id(&self, raw: &str) -> Result<StudentId>;

    /// Stores a new student under a freshly assigned id.
    async fn create(&self, fields: StudentFields) -> Result<Student>;

    /// Returns stored students in storage order.
    async fn list_all(&self) -> Result<Vec<Student>>;

    async fn get_one(&self, id: &StudentId) -> Result<Student>;

    /// Replaces every data field of the student, keeping its id.
    async fn update(&self, id: &StudentId, fields: StudentFields) -> Result<Student>;

    async fn delete(&self, id: &StudentId) -> Result<()>;
}
