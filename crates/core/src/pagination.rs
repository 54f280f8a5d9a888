//! Pagination defaults and result-page metadata.

use serde::{Deserialize, Serialize};

/// Default number of properties per page.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Maximum number of properties per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a requested page number to 1-based.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested page size to `1..=MAX_PAGE_SIZE`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Row offset for a 1-based page.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Metadata attached to every paginated result set.
///
/// `pages` is the total page count; requesting a page beyond it yields an
/// empty list, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = if total == 0 { 0 } else { (total + limit - 1) / limit };
        Pagination { page, limit, total, pages }
    }
}
