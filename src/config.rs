//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Origin of the development frontend allowed to call the API.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Which storage backend holds the student records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-process list, lost on restart
    Memory,
    /// MongoDB collection
    Mongo,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// How the memory backend assigns ids to new students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// 1, 2, 3, ... (one past the current maximum)
    Sequential,
    /// Opaque ObjectId hex strings
    ObjectId,
}

impl FromStr for IdKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdKind::Sequential),
            "object-id" | "objectid" => Ok(IdKind::ObjectId),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}

/// MongoDB connection parameters.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection holding the students
    pub collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "school".to_string(),
            collection: "students".to_string(),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Storage backend
    pub backend: StorageBackend,
    /// Id assignment for the memory backend
    pub id_kind: IdKind,
    /// Start the memory backend with the sample student
    pub seed_sample: bool,
    /// Allowed cross-origin caller
    pub cors_origin: String,
    /// MongoDB settings, used when `backend` is `Mongo`
    pub mongo: MongoConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `STORAGE_BACKEND` - `memory` or `mongo` (default: memory)
    /// - `ID_STRATEGY` - `sequential` or `object-id` (default: sequential)
    /// - `SEED_SAMPLE` - seed the sample student (default: false)
    /// - `CORS_ORIGIN` - allowed origin (default: http://localhost:5173)
    /// - `MONGODB_URI`, `MONGODB_DATABASE`, `MONGODB_COLLECTION`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            backend: parsed_var("STORAGE_BACKEND").unwrap_or(defaults.backend),
            id_kind: parsed_var("ID_STRATEGY").unwrap_or(defaults.id_kind),
            seed_sample: parsed_var("SEED_SAMPLE").unwrap_or(defaults.seed_sample),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            mongo: MongoConfig {
                uri: env::var("MONGODB_URI").unwrap_or(defaults.mongo.uri),
                database: env::var("MONGODB_DATABASE").unwrap_or(defaults.mongo.database),
                collection: env::var("MONGODB_COLLECTION").unwrap_or(defaults.mongo.collection),
            },
        }
    }
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            backend: StorageBackend::Memory,
            id_kind: IdKind::Sequential,
            seed_sample: false,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            mongo: MongoConfig::default(),
        }
    }
}
