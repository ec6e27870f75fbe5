//! Document store seam
//!
//! The HTTP handlers only see the [`DocumentStore`] trait; the concrete
//! backend is chosen once at startup from the connection string scheme.

mod memory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::types::Movie;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Document store failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at all
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store was reached but the operation failed
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// The three operations the service performs against its collection.
///
/// Each implementation scopes whatever connection it needs to the single
/// call and releases it on every exit path. No isolation is provided
/// between concurrent calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Bulk-insert the given records. Returns the number actually inserted.
    async fn insert_movies(&self, movies: &[Movie]) -> Result<u64, StoreError>;

    /// Return every record in the collection.
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// Delete every record in the collection. Returns the number deleted.
    /// Idempotent: clearing an empty collection succeeds with 0.
    async fn clear(&self) -> Result<u64, StoreError>;
}

/// Select a store backend from the configured connection string.
///
/// `mem:` selects the in-memory backend; anything else is treated as a
/// MongoDB connection string. No connection is opened here: every backend
/// connects per operation.
pub fn connect(config: &Config) -> Arc<dyn DocumentStore> {
    if config.store_uri.starts_with("mem:") {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(MongoStore::new(config))
    }
}
