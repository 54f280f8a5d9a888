//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` response struct for external-facing output where the row
//!   itself is not safe or not shaped for the wire
//! - Create/update DTOs for inserts and partial updates

pub mod lead;
pub mod property;
pub mod role;
pub mod session;
pub mod stats;
pub mod status;
pub mod user;
pub mod wishlist;
