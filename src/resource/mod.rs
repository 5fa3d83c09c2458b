//! # Resource Handling
//!
//! The generic entity-resource pattern: six uniform operations per entity
//! type, one failure taxonomy, and the outbound projection applied to every
//! record that leaves the core.

pub mod errors;
pub mod handler;
pub mod response;

pub use errors::{ErrorResponse, ResourceError, ResourceResult};
pub use handler::ResourceHandler;
pub use response::Created;
