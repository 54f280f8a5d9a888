//! Aggregate queries behind the admin dashboard.

use sqlx::SqlitePool;

use crate::models::stats::DashboardStats;
use crate::models::status::{LeadStatus, PropertyStatus};

/// Provides the dashboard counters.
pub struct StatsRepo;

impl StatsRepo {
    /// Compute the dashboard snapshot.
    ///
    /// Each counter is an independent read; no cross-aggregate consistency
    /// is guaranteed under concurrent writes.
    pub async fn dashboard(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
        let total_properties: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(pool)
            .await?;

        let active_properties: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE status_id = $1")
                .bind(PropertyStatus::Active.id())
                .fetch_one(pool)
                .await?;

        let total_leads: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
            .fetch_one(pool)
            .await?;

        let new_leads: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads WHERE status_id = $1")
            .bind(LeadStatus::New.id())
            .fetch_one(pool)
            .await?;

        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        let total_views: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(views), 0) FROM properties")
            .fetch_one(pool)
            .await?;

        Ok(DashboardStats {
            total_properties,
            active_properties,
            total_leads,
            new_leads,
            total_users,
            total_views,
        })
    }
}
