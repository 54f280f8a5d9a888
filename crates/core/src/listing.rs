//! Listing vocabulary: property categories, purposes, and the payload shape.
//!
//! The payload is the semi-structured attribute bag attached to every
//! property. It is stored as a single JSON document and transmitted as-is;
//! optional attributes that are absent are omitted from the JSON entirely,
//! never serialized as null.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Top-level property category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Residential,
    Commercial,
}

/// What the listing is offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Buy,
    Rent,
    Lease,
}

/// Geographic location of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// The attribute bag attached to a property.
///
/// `category`, `purpose`, `price`, `area`, and `location` are always present;
/// everything else is an optional domain attribute that only applies to some
/// listings (bedrooms make no sense for a warehouse, businessType makes none
/// for a flat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    pub category: Category,
    pub purpose: Purpose,
    pub price: f64,
    /// Built-up area in square feet.
    pub area: f64,
    pub location: Location,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balconies: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_of_property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_backup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rera_registered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rera_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_charge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_deposit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_in_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_friendly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servant_room: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pooja_room: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_room: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyPayload {
    /// Check the payload invariants: price and area must be non-negative,
    /// monetary extras likewise when present.
    ///
    /// Category and purpose are enforced at the type level; a payload that
    /// deserialized at all already has valid enumeration values.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.price < 0.0 {
            return Err(CoreError::Validation("price must be non-negative".into()));
        }
        if self.area < 0.0 {
            return Err(CoreError::Validation("area must be non-negative".into()));
        }
        if self.maintenance_charge.is_some_and(|v| v < 0.0) {
            return Err(CoreError::Validation(
                "maintenanceCharge must be non-negative".into(),
            ));
        }
        if self.security_deposit.is_some_and(|v| v < 0.0) {
            return Err(CoreError::Validation(
                "securityDeposit must be non-negative".into(),
            ));
        }
        if self.location.city.trim().is_empty() {
            return Err(CoreError::Validation("location.city must not be empty".into()));
        }
        Ok(())
    }
}
