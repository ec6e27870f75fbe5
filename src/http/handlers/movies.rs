//! Data route handlers: insert, list, clear
//!
//! Each handler performs exactly one store operation. Store failures
//! propagate as [`ServiceError`] and render as an opaque 500.

use axum::extract::State;
use axum::response::Html;
use tracing::debug;

use super::AppState;
use crate::error::ServiceError;
use crate::types::sample_movies;

/// Insert the fixed sample set into the collection.
pub async fn insert_movies(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    let inserted = state.store.insert_movies(&sample_movies()).await?;
    debug!("insert route inserted {} movies", inserted);
    Ok(Html(format!("<h2>Inserted {} movies</h2>", inserted)))
}

/// List every record in the collection.
pub async fn list_movies(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    let movies = state.store.list_movies().await?;

    let mut body = String::new();
    for movie in &movies {
        body.push_str(&movie.display_line());
        body.push_str("<br>");
    }
    body.push_str(&format!("Found: {} movies", movies.len()));

    Ok(Html(body))
}

/// Delete every record in the collection.
pub async fn clear_collection(
    State(state): State<AppState>,
) -> Result<Html<&'static str>, ServiceError> {
    let deleted = state.store.clear().await?;
    debug!("clear route deleted {} movies", deleted);
    Ok(Html("<h2>Collection Cleared</h2>"))
}
