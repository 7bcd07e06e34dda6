//! API Routes
//!
//! Configures the Axum router with all student registry endpoints.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
    AppState,
};

/// Builds the CORS policy: one origin, credentials allowed, any method and
/// header. Requests from other origins get no CORS headers.
///
/// Credentialed requests may not use `*`, so methods and headers echo what
/// the preflight asks for.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /students` - Create a student
/// - `GET /students` - List students
/// - `GET /students/:id` - Fetch one student
/// - `PUT /students/:id` - Replace a student's fields
/// - `DELETE /students/:id` - Delete a student
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: the single allowed origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/students", get(list_handler).post(create_handler))
        .route(
            "/students/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
