//! Student Registry - A small student records service
//!
//! CRUD over student records, stored in memory or in MongoDB.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{RegistryError, Result};
