use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    AppState, add_book, delete_book_by_id, edit_book_by_id, get_book_by_id, list_books,
};

/// Creates the API router with all book management endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Add a book
/// - PUT /books/:id - Replace a book
/// - DELETE /books/:id - Delete a book
///
/// Query endpoints (Read operations):
/// - GET /books - List books with optional name/reading/finished filters
/// - GET /books/:id - Get book details
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", get(list_books).post(add_book))
        .route(
            "/books/:id",
            get(get_book_by_id)
                .put(edit_book_by_id)
                .delete(delete_book_by_id),
        )
        // Any origin may call the API
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
