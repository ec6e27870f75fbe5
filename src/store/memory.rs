//! In-memory document store
//!
//! Backs the test suite and `mem:` connection strings. A single mutex
//! protects individual operations only; sequences of operations interleave
//! freely, matching the per-request semantics of the real backend.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::types::Movie;

use super::{DocumentStore, StoreError};

/// In-memory collection of movie records
#[derive(Default)]
pub struct MemoryStore {
    movies: Mutex<Vec<Movie>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_movies(&self, movies: &[Movie]) -> Result<u64, StoreError> {
        let mut guard = self.movies.lock();
        guard.extend_from_slice(movies);
        Ok(movies.len() as u64)
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.lock().clone())
    }

    async fn clear(&self) -> Result<u64, StoreError> {
        let mut guard = self.movies.lock();
        let deleted = guard.len() as u64;
        guard.clear();
        Ok(deleted)
    }
}
