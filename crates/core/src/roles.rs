//! Well-known role name constants.
//!
//! These must match the seed data in the `create_roles_table` migration.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
