//! Service configuration
//!
//! All configuration is read from the environment exactly once at startup
//! and validated before any route becomes reachable.

use std::env;

use crate::error::ServiceError;

/// Default database name
pub const DEFAULT_DB_NAME: &str = "CMSC335DB";

/// Default collection name
pub const DEFAULT_COLLECTION_NAME: &str = "moviesCollection";

/// Default listen port
pub const DEFAULT_PORT: u16 = 7003;

/// Environment variable holding the store connection string (required)
pub const CONNECTION_STRING_VAR: &str = "MONGO_CONNECTION_STRING";

/// Main configuration for the movies service
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection string
    pub store_uri: String,
    /// Database name
    pub database: String,
    /// Collection name
    pub collection: String,
    /// HTTP listen port
    pub port: u16,
}

impl Config {
    /// Build a configuration from the environment.
    ///
    /// Fails fast: a missing connection string or a malformed port prevents
    /// construction, so no server is ever started with a broken config.
    pub fn from_env() -> Result<Self, ServiceError> {
        let mut errors: Vec<String> = Vec::new();

        let store_uri = env::var(CONNECTION_STRING_VAR).unwrap_or_default();
        let database = env::var("MONGO_DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());
        let collection = env::var("MONGO_COLLECTION_NAME")
            .unwrap_or_else(|_| DEFAULT_COLLECTION_NAME.to_string());

        let port = match env::var("PORT") {
            Err(_) => DEFAULT_PORT,
            Ok(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    errors.push(format!(
                        "PORT must be a number between 1 and 65535, got '{}'",
                        raw
                    ));
                    DEFAULT_PORT
                }
            },
        };

        let config = Self {
            store_uri,
            database,
            collection,
            port,
        };
        errors.extend(config.validation_errors());

        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ServiceError::Config(errors.join("; ")))
        }
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass.
    pub fn validate(&self) -> Result<(), ServiceError> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Config(errors.join("; ")))
        }
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors: Vec<String> = Vec::new();

        if self.store_uri.is_empty() {
            errors.push(format!(
                "missing {} environment variable",
                CONNECTION_STRING_VAR
            ));
        }
        if self.database.is_empty() {
            errors.push("database name must not be empty".to_string());
        }
        if self.collection.is_empty() {
            errors.push("collection name must not be empty".to_string());
        }
        if self.port == 0 {
            errors.push("listen port must be between 1 and 65535".to_string());
        }

        errors
    }
}
