//! Property entity model and DTOs.

use parkside_core::listing::PropertyPayload;
use parkside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::status::{PropertyStatus, StatusId};

/// Full property row from the `properties` table.
///
/// The payload column holds the listing's attribute bag as JSON text and is
/// decoded into the typed [`PropertyPayload`] shape.
#[derive(Debug, Clone, FromRow)]
pub struct Property {
    pub id: DbId,
    pub title: String,
    pub status_id: StatusId,
    pub views: i64,
    pub payload: Json<PropertyPayload>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// External-facing property representation: the status ID is resolved to
/// its wire label and the payload is inlined.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: DbId,
    pub title: String,
    pub status: &'static str,
    pub views: i64,
    pub payload: PropertyPayload,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Property> for PropertyResponse {
    fn from(row: Property) -> Self {
        PropertyResponse {
            id: row.id,
            title: row.title,
            status: PropertyStatus::label_of(row.status_id),
            views: row.views,
            payload: row.payload.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new property.
#[derive(Debug, Deserialize)]
pub struct CreateProperty {
    pub title: String,
    pub payload: PropertyPayload,
    /// Status label; defaults to `Active` when absent.
    pub status: Option<String>,
}

/// DTO for updating an existing property. All fields are optional; the
/// payload, when present, replaces the stored one wholesale.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub payload: Option<PropertyPayload>,
    pub status: Option<String>,
}
