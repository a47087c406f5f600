//! REST API layer: Axum router, HTTP handlers, models, and errors.

/// API error types mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and shared application state.
pub mod handlers;
/// Request and response data transfer objects.
pub mod models;

use axum::routing::{get, post};
use axum::Router;
use handlers::AppState;

/// Build the application router with all routes bound to the shared state.
///
/// The static `filter-by-natural-language` segment is registered alongside
/// the `:value` capture; the router prefers the static match.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/strings",
            post(handlers::upload_string).get(handlers::filtered_strings),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::natural_language_filter),
        )
        .route(
            "/strings/:value",
            get(handlers::get_string).delete(handlers::delete_string),
        )
        .with_state(state)
}
