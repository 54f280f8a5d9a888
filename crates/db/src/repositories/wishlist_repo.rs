//! Repository for the `wishlist_items` table.

use parkside_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::property::Property;
use crate::models::wishlist::WishlistItem;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, property_id, created_at";

/// Provides operations for a user's saved properties.
pub struct WishlistRepo;

impl WishlistRepo {
    /// Save a property to a user's wishlist, returning the created row.
    ///
    /// Saving an already-saved property violates the unique
    /// `(user_id, property_id)` constraint and surfaces as a conflict.
    pub async fn add(
        pool: &SqlitePool,
        user_id: DbId,
        property_id: DbId,
    ) -> Result<WishlistItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO wishlist_items (user_id, property_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(user_id)
            .bind(property_id)
            .fetch_one(pool)
            .await
    }

    /// Remove a property from a user's wishlist. Returns `true` if a row
    /// was removed.
    pub async fn remove(
        pool: &SqlitePool,
        user_id: DbId,
        property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND property_id = $2")
                .bind(user_id)
                .bind(property_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the properties a user has saved, most recently saved first.
    pub async fn list_properties_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            "SELECT p.id, p.title, p.status_id, p.views, p.payload, p.created_at, p.updated_at
             FROM wishlist_items w
             JOIN properties p ON p.id = w.property_id
             WHERE w.user_id = $1
             ORDER BY w.created_at DESC, w.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
