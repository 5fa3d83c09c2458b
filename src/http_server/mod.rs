//! # HTTP Server Module
//!
//! Axum wiring for the records API: configuration, generic per-entity
//! routes, and the combined server.

pub mod config;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use routes::resource_routes;
pub use server::HttpServer;
