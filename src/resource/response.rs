//! # Response Formatting
//!
//! Records serialize bare (arrays for lists, one object for a single
//! record); the only wrapper is the created-record response, which carries
//! the location of the get-by-id route.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Created-record response: 201 with a `Location` header pointing at the
/// record's get-by-id route.
#[derive(Debug, Clone)]
pub struct Created<T: Serialize> {
    pub location: String,
    pub record: T,
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(header::LOCATION, self.location)],
            Json(self.record),
        )
            .into_response()
    }
}
