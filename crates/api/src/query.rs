//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic page-based pagination parameters (`?page=&limit=`).
///
/// Values are clamped via `parkside_core::pagination::{clamp_page, clamp_limit}`
/// before reaching the repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
