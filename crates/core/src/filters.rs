//! Search filter model and the session-scoped filter store.
//!
//! [`SearchFilters`] is the typed, server-side view of a property search:
//! one optional field per filterable attribute plus the sort order. Field
//! names are camelCase on the wire (query-string parameters); an absent
//! field imposes no constraint, and empty query-string values deserialize
//! to absent rather than to an empty-string sentinel.
//!
//! [`FilterState`] is the browsing session's store of raw filter values. It
//! is an owned value passed explicitly to whoever needs it, serialized to
//! query pairs as an explicit step. It performs no validation; values flow
//! through to the query layer as-is.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Sort order for property search results.
///
/// Every ordering tie-breaks by ascending id so pagination stays
/// deterministic when the sort key collides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Most recently created first.
    #[default]
    Newest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Most viewed first.
    Views,
}

impl SortBy {
    /// Wire value as it appears in the `sortBy` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::Views => "views",
        }
    }

    /// Parse a wire value, falling back to [`SortBy::Newest`] for anything
    /// unrecognized (an unknown sort narrows nothing, it just sorts by the
    /// default).
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "price_asc" => SortBy::PriceAsc,
            "price_desc" => SortBy::PriceDesc,
            "views" => SortBy::Views,
            _ => SortBy::Newest,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialize empty strings as None for optional numeric fields.
///
/// Query strings carry `minPrice=` when a form field is cleared; that must
/// read as "no constraint", not as a parse error.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Deserialize a comma-separated list, treating empty input as None.
fn comma_separated<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(
            s.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )),
    }
}

/// Typed property search filters.
///
/// String-valued filters (category, purpose, status, ...) are carried raw:
/// a value outside the known vocabulary simply matches no rows, which is the
/// marketplace's contract for malformed filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Case-insensitive substring match on the listing title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Overrides the Active-only default when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i64>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub min_area: Option<f64>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub max_area: Option<f64>,
    /// Any-overlap membership: a property matches when it has at least one
    /// of the requested amenities.
    #[serde(deserialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    /// Any-overlap membership over the payload's businessType list.
    #[serde(deserialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub business_type: Option<Vec<String>>,
    pub sort_by: SortBy,
}

// ---------------------------------------------------------------------------
// Session filter store
// ---------------------------------------------------------------------------

/// One named, optional field of [`SearchFilters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterKey {
    Query,
    Category,
    Purpose,
    Status,
    City,
    Locality,
    Furnishing,
    Bedrooms,
    Bathrooms,
    MinPrice,
    MaxPrice,
    MinArea,
    MaxArea,
    Amenities,
    BusinessType,
    SortBy,
}

impl FilterKey {
    /// All filter keys, in wire order.
    pub const ALL: &'static [FilterKey] = &[
        FilterKey::Query,
        FilterKey::Category,
        FilterKey::Purpose,
        FilterKey::Status,
        FilterKey::City,
        FilterKey::Locality,
        FilterKey::Furnishing,
        FilterKey::Bedrooms,
        FilterKey::Bathrooms,
        FilterKey::MinPrice,
        FilterKey::MaxPrice,
        FilterKey::MinArea,
        FilterKey::MaxArea,
        FilterKey::Amenities,
        FilterKey::BusinessType,
        FilterKey::SortBy,
    ];

    /// Query-string parameter name.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Query => "q",
            FilterKey::Category => "category",
            FilterKey::Purpose => "purpose",
            FilterKey::Status => "status",
            FilterKey::City => "city",
            FilterKey::Locality => "locality",
            FilterKey::Furnishing => "furnishing",
            FilterKey::Bedrooms => "bedrooms",
            FilterKey::Bathrooms => "bathrooms",
            FilterKey::MinPrice => "minPrice",
            FilterKey::MaxPrice => "maxPrice",
            FilterKey::MinArea => "minArea",
            FilterKey::MaxArea => "maxArea",
            FilterKey::Amenities => "amenities",
            FilterKey::BusinessType => "businessType",
            FilterKey::SortBy => "sortBy",
        }
    }
}

/// The browsing session's filter selection.
///
/// Holds raw string values exactly as the UI produced them; nothing here
/// validates against the property schema. The default state has every key
/// absent except the sort order, which is [`SortBy::Newest`].
///
/// This is an owned, explicitly passed value — one per session or page
/// context. Persisting it anywhere is an explicit
/// [`to_query_pairs`](FilterState::to_query_pairs) call, never an implicit
/// side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<FilterKey, String>,
}

impl Default for FilterState {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(FilterKey::SortBy, SortBy::Newest.as_str().to_string());
        FilterState { values }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a filter value. An empty (or whitespace-only) value unsets the
    /// key instead — "cleared" and "absent" are the same state.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    /// Delete a key unconditionally. No-op when absent.
    pub fn remove(&mut self, key: FilterKey) {
        self.values.remove(&key);
    }

    /// Restore the default state: all filters absent, sort order `newest`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Current raw value for a key, if set.
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Current sort order; unparseable or missing values read as the default.
    pub fn sort_by(&self) -> SortBy {
        self.get(FilterKey::SortBy)
            .map(SortBy::parse_or_default)
            .unwrap_or_default()
    }

    /// Number of active filters, not counting the sort order.
    pub fn active_filter_count(&self) -> usize {
        self.values.keys().filter(|k| **k != FilterKey::SortBy).count()
    }

    /// Serialize to query-string pairs in wire order.
    ///
    /// Absent keys are omitted entirely; the sort order is emitted only when
    /// it differs from the default, so a default state serializes to nothing.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        FilterKey::ALL
            .iter()
            .filter_map(|&key| {
                let value = self.values.get(&key)?;
                if key == FilterKey::SortBy && self.sort_by() == SortBy::Newest {
                    return None;
                }
                Some((key.as_str(), value.clone()))
            })
            .collect()
    }
}
