//! MongoDB Repository
//!
//! Persistent backend. Every operation is one document-store call, so each
//! is atomic on the server; nothing is promised across calls.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_document, Document},
    options::ReturnDocument,
    Client, Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MongoConfig;
use crate::error::{RegistryError, Result};
use crate::models::{Student, StudentFields, StudentId};
use crate::store::{IdStrategy, ObjectIds, StudentRepository};

/// Most students returned by one list call.
pub const LIST_LIMIT: i64 = 100;

/// Shape of a student inside the collection.
#[derive(Debug, Serialize, Deserialize)]
struct StudentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(flatten)]
    fields: StudentFields,
}

impl StudentDocument {
    fn into_student(self) -> Result<Student> {
        let id = self
            .id
            .ok_or_else(|| RegistryError::Storage("student document without _id".to_string()))?;
        Ok(Student::new(StudentId::Opaque(id.to_hex()), self.fields))
    }
}

/// Student storage in a MongoDB collection. Ids are the ObjectIds the
/// driver assigns on insert.
#[derive(Debug, Clone)]
pub struct MongoRepository {
    collection: Collection<StudentDocument>,
}

impl MongoRepository {
    /// Connects to the configured server and checks it answers a ping.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;
        info!(
            "Connected to MongoDB database '{}', collection '{}'",
            config.database, config.collection
        );
        Ok(Self::from_database(&database, &config.collection))
    }

    pub fn from_database(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }

    fn object_id(id: &StudentId) -> Result<ObjectId> {
        match id {
            StudentId::Opaque(hex) => {
                ObjectId::parse_str(hex).map_err(|_| RegistryError::not_found(id))
            }
            StudentId::Sequential(_) => Err(RegistryError::not_found(id)),
        }
    }

    /// Filter matching the one document with this id.
    fn id_filter(id: &StudentId) -> Result<Document> {
        Ok(doc! { "_id": Self::object_id(id)? })
    }

    /// Update overwriting every data field; `_id` is left alone.
    fn replace_fields(fields: &StudentFields) -> Result<Document> {
        Ok(doc! { "$set": to_document(fields)? })
    }
}

#[async_trait]
impl StudentRepository for MongoRepository {
    fn parse_id(&self, raw: &str) -> Result<StudentId> {
        ObjectIds
            .parse(raw)
            .ok_or_else(|| RegistryError::not_found(raw))
    }

    async fn create(&self, fields: StudentFields) -> Result<Student> {
        let document = StudentDocument { id: None, fields };
        let inserted = self.collection.insert_one(&document).await?;
        let oid = inserted.inserted_id.as_object_id().ok_or_else(|| {
            RegistryError::Storage("insert did not return an ObjectId".to_string())
        })?;
        debug!(id = %oid, "student created");
        Ok(Student::new(StudentId::Opaque(oid.to_hex()), document.fields))
    }

    async fn list_all(&self) -> Result<Vec<Student>> {
        let documents: Vec<StudentDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .limit(LIST_LIMIT)
            .await?
            .try_collect()
            .await?;
        documents
            .into_iter()
            .map(StudentDocument::into_student)
            .collect()
    }

    async fn get_one(&self, id: &StudentId) -> Result<Student> {
        self.collection
            .find_one(Self::id_filter(id)?)
            .await?
            .ok_or_else(|| RegistryError::not_found(id))?
            .into_student()
    }

    async fn update(&self, id: &StudentId, fields: StudentFields) -> Result<Student> {
        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id)?, Self::replace_fields(&fields)?)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| RegistryError::not_found(id))?;
        debug!(%id, "student updated");
        updated.into_student()
    }

    async fn delete(&self, id: &StudentId) -> Result<()> {
        self.collection
            .find_one_and_delete(Self::id_filter(id)?)
            .await?
            .ok_or_else(|| RegistryError::not_found(id))?;
        debug!(%id, "student deleted");
        Ok(())
    }
}
