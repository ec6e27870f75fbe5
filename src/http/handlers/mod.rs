//! HTTP request handlers
//!
//! Handlers that map HTTP requests to document store operations.

mod movies;
mod system;

use std::sync::Arc;

use crate::store::DocumentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

// Re-export all handlers
pub use movies::{clear_collection, insert_movies, list_movies};
pub use system::{get_summary, health, root};
