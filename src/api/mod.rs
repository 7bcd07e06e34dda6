//! API Module
//!
//! HTTP handlers and routing for the student registry REST API.
//!
//! # Endpoints
//! - `POST /students` - Create a student
//! - `GET /students` - List students
//! - `GET /students/:id` - Fetch one student
//! - `PUT /students/:id` - Replace a student's fields
//! - `DELETE /students/:id` - Delete a student
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{cors_layer, create_router};
