//! Memory Repository
//!
//! Ephemeral backend: a `StudentTable` shared behind a tokio `RwLock`.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::models::{Student, StudentFields, StudentId};
use crate::store::{IdStrategy, StudentRepository, StudentTable};

/// In-process student storage. Clones share the same table.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    table: Arc<RwLock<StudentTable>>,
    /// Same strategy the table numbers records with
    ids: Arc<dyn IdStrategy>,
}

impl MemoryRepository {
    pub fn new(table: StudentTable) -> Self {
        Self {
            ids: table.id_strategy(),
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Number of stored students.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new(StudentTable::default())
    }
}

#[async_trait]
impl StudentRepository for MemoryRepository {
    fn parse_id(&self, raw: &str) -> Result<StudentId> {
        self.ids
            .parse(raw)
            .ok_or_else(|| RegistryError::not_found(raw))
    }

    async fn create(&self, fields: StudentFields) -> Result<Student> {
        // Id assignment and insert share one write lock.
        let mut table = self.table.write().await;
        let student = table.insert(fields);
        debug!(id = %student.id, "student created");
        Ok(student)
    }

    async fn list_all(&self) -> Result<Vec<Student>> {
        let table = self.table.read().await;
        Ok(table.all().to_vec())
    }

    async fn get_one(&self, id: &StudentId) -> Result<Student> {
        let table = self.table.read().await;
        table.get(id).cloned()
    }

    async fn update(&self, id: &StudentId, fields: StudentFields) -> Result<Student> {
        let mut table = self.table.write().await;
        let student = table.replace(id, fields)?.clone();
        debug!(id = %student.id, "student updated");
        Ok(student)
    }

    async fn delete(&self, id: &StudentId) -> Result<()> {
        let mut table = self.table.write().await;
        table.remove(id)?;
        debug!(%id, "student deleted");
        Ok(())
    }
}
