//! HTTP route definitions

use axum::{routing::get, Router};

use super::handlers::{self, AppState};

/// Create the router with all routes.
///
/// Every route is GET with no body and no parameters; each request is
/// independent and stateless.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/insertMovies", get(handlers::insert_movies))
        .route("/listMovies", get(handlers::list_movies))
        .route("/clearCollection", get(handlers::clear_collection))
        .route("/getSummary", get(handlers::get_summary))
        .route("/health", get(handlers::health))
        .with_state(state)
}
