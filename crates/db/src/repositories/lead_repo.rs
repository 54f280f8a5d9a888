//! Repository for the `leads` table.

use parkside_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::lead::{CreateLead, Lead};
use crate::models::status::StatusId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, phone, message, property_id, status_id, created_at, updated_at";

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead in the `New` status, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, phone, message, property_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(input.property_id)
            .fetch_one(pool)
            .await
    }

    /// Find a lead by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List leads newest first, optionally narrowed to one status, with the
    /// total count for pagination.
    pub async fn list(
        pool: &SqlitePool,
        status_id: Option<StatusId>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Lead>, i64), sqlx::Error> {
        let (total, leads) = match status_id {
            Some(status_id) => {
                let total =
                    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM leads WHERE status_id = $1")
                        .bind(status_id)
                        .fetch_one(pool)
                        .await?;
                let query = format!(
                    "SELECT {COLUMNS} FROM leads WHERE status_id = $1
                     ORDER BY created_at DESC, id DESC
                     LIMIT $2 OFFSET $3"
                );
                let leads = sqlx::query_as::<_, Lead>(&query)
                    .bind(status_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?;
                (total, leads)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM leads")
                    .fetch_one(pool)
                    .await?;
                let query = format!(
                    "SELECT {COLUMNS} FROM leads
                     ORDER BY created_at DESC, id DESC
                     LIMIT $1 OFFSET $2"
                );
                let leads = sqlx::query_as::<_, Lead>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?;
                (total, leads)
            }
        };
        Ok((leads, total))
    }

    /// Move a lead to a new status, returning the updated row.
    ///
    /// Transition legality is checked by the caller against
    /// [`LeadStatus::can_transition_to`](crate::models::status::LeadStatus).
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status_id: StatusId,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET status_id = $2, updated_at = datetime('now')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(status_id)
            .fetch_optional(pool)
            .await
    }
}
