//! Movies service: a small HTTP service that inserts, lists, and clears a
//! fixed set of sample movie records in a document store.
//!
//! Every data route is a direct pass-through to one store operation: bulk
//! insert of the hardcoded sample set, unconditional find-all, or
//! unconditional delete-all. A static summary page and a health check round
//! out the surface.

pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::ServiceError;
