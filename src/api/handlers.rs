//! API Handlers
//!
//! HTTP request handlers for each student registry endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::config::{Config, StorageBackend};
use crate::error::Result;
use crate::models::{HealthResponse, MessageResponse, Student, StudentFields};
use crate::store::{strategy_for, MemoryRepository, MongoRepository, StudentRepository, StudentTable};

/// Application state shared across all handlers.
///
/// Holds the repository the deployment was configured with. Handlers only
/// see the `StudentRepository` contract.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn StudentRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(repo: impl StudentRepository + 'static) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the selected backend; for MongoDB this connects to the server.
    pub async fn from_config(config: &Config) -> Result<Self> {
        match config.backend {
            StorageBackend::Memory => {
                let mut table = StudentTable::new(strategy_for(config.id_kind));
                if config.seed_sample {
                    table = table.with_sample();
                }
                info!(
                    "Using in-memory storage ({:?} ids, {} seeded)",
                    config.id_kind,
                    table.len()
                );
                Ok(Self::new(MemoryRepository::new(table)))
            }
            StorageBackend::Mongo => {
                let repo = MongoRepository::connect(&config.mongo).await?;
                Ok(Self::new(repo))
            }
        }
    }
}

/// Handler for POST /students
pub async fn create_handler(
    State(state): State<AppState>,
    Json(fields): Json<StudentFields>,
) -> Result<Json<Student>> {
    let student = state.repo.create(fields).await?;
    info!(id = %student.id, "Created student");
    Ok(Json(student))
}

/// Handler for GET /students
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Student>>> {
    Ok(Json(state.repo.list_all().await?))
}

/// Handler for GET /students/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Student>> {
    let id = state.repo.parse_id(&raw_id)?;
    Ok(Json(state.repo.get_one(&id).await?))
}

/// Handler for PUT /students/:id
///
/// Replaces all fields; there is no partial update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(fields): Json<StudentFields>,
) -> Result<Json<Student>> {
    let id = state.repo.parse_id(&raw_id)?;
    let student = state.repo.update(&id, fields).await?;
    info!(id = %student.id, "Updated student");
    Ok(Json(student))
}

/// Handler for DELETE /students/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = state.repo.parse_id(&raw_id)?;
    state.repo.delete(&id).await?;
    info!(%id, "Deleted student");
    Ok(Json(MessageResponse::deleted()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
