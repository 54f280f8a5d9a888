//! Admin dashboard aggregate snapshot.

use serde::Serialize;

/// Read-only dashboard counters, recomputed on each request.
///
/// Each field comes from an independent aggregate query; values may reflect
/// slightly different instants under concurrent writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: i64,
    pub active_properties: i64,
    pub total_leads: i64,
    pub new_leads: i64,
    pub total_users: i64,
    pub total_views: i64,
}
