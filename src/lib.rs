//! backoffice - CRUD REST backend for customer, employee, and product records
//!
//! One generic resource handler serves every entity type against an async
//! store abstraction with optimistic-concurrency detection on replace.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod resource;
pub mod store;
