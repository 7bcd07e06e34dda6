//! Request and Response models for the student registry API
//!
//! This module defines the student record and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::StudentFields;
pub use responses::{HealthResponse, MessageResponse};
pub use student::{Student, StudentId};
