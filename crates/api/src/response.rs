//! Shared response envelope types for API handlers.
//!
//! Single records and plain lists are returned bare; derived views (thread
//! listings, statistics) use the `{ "data": ... }` envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
