//! MongoDB document store
//!
//! Each operation opens a fresh client, performs exactly one collection
//! call, and shuts the client down before the result is returned. The
//! connect/operate/disconnect scope is per call on every exit path.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::debug;

use crate::config::Config;
use crate::types::Movie;

use super::{DocumentStore, StoreError};

/// MongoDB-backed store addressed by connection string
pub struct MongoStore {
    uri: String,
    database: String,
    collection: String,
}

impl MongoStore {
    pub fn new(config: &Config) -> Self {
        Self {
            uri: config.store_uri.clone(),
            database: config.database.clone(),
            collection: config.collection.clone(),
        }
    }

    async fn client(&self) -> Result<Client, StoreError> {
        Client::with_uri_str(&self.uri)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn collection(&self, client: &Client) -> Collection<Movie> {
        client.database(&self.database).collection(&self.collection)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_movies(&self, movies: &[Movie]) -> Result<u64, StoreError> {
        let client = self.client().await?;
        let result = self
            .collection(&client)
            .insert_many(movies)
            .await
            .map(|r| r.inserted_ids.len() as u64)
            .map_err(|e| StoreError::Operation(e.to_string()));
        client.shutdown().await;

        if let Ok(inserted) = &result {
            debug!("inserted {} movies into {}", inserted, self.collection);
        }
        result
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let client = self.client().await?;
        let result = match self.collection(&client).find(doc! {}).await {
            Ok(cursor) => cursor
                .try_collect::<Vec<Movie>>()
                .await
                .map_err(|e| StoreError::Operation(e.to_string())),
            Err(e) => Err(StoreError::Operation(e.to_string())),
        };
        client.shutdown().await;
        result
    }

    async fn clear(&self) -> Result<u64, StoreError> {
        let client = self.client().await?;
        let result = self
            .collection(&client)
            .delete_many(doc! {})
            .await
            .map(|r| r.deleted_count)
            .map_err(|e| StoreError::Operation(e.to_string()));
        client.shutdown().await;

        if let Ok(deleted) = &result {
            debug!("deleted {} movies from {}", deleted, self.collection);
        }
        result
    }
}
