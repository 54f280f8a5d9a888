//! Lead entity model and DTOs.

use parkside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::{LeadStatus, StatusId};

/// A prospective-customer contact row from the `leads` table.
#[derive(Debug, Clone, FromRow)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub property_id: Option<DbId>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// External-facing lead representation with the status label resolved.
#[derive(Debug, Clone, Serialize)]
pub struct LeadResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub property_id: Option<DbId>,
    pub status: &'static str,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Lead> for LeadResponse {
    fn from(row: Lead) -> Self {
        LeadResponse {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            message: row.message,
            property_id: row.property_id,
            status: LeadStatus::label_of(row.status_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new lead. Leads always start in the `New` status.
#[derive(Debug, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub property_id: Option<DbId>,
}
