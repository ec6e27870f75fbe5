//! HTTP server module
//!
//! Axum-based HTTP surface for the movies service.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use server::HttpServer;
