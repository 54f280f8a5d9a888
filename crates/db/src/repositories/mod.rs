//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod lead_repo;
pub mod property_repo;
pub mod role_repo;
pub mod session_repo;
pub mod stats_repo;
pub mod user_repo;
pub mod wishlist_repo;

pub use lead_repo::LeadRepo;
pub use property_repo::PropertyRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
pub use wishlist_repo::WishlistRepo;
