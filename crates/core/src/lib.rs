//! Parkside domain layer.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository/API layer and the maintenance CLI alike.

pub mod error;
pub mod filters;
pub mod listing;
pub mod pagination;
pub mod roles;
pub mod types;
