//! Wishlist entity model.

use parkside_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A saved-property row from the `wishlist_items` table.
///
/// The `(user_id, property_id)` pair is unique; saving the same listing
/// twice is a conflict.
#[derive(Debug, Clone, FromRow)]
pub struct WishlistItem {
    pub id: DbId,
    pub user_id: DbId,
    pub property_id: DbId,
    pub created_at: Timestamp,
}
