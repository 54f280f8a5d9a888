//! Repository for the `properties` table, including the marketplace
//! search/filter query builder.

use parkside_core::filters::{SearchFilters, SortBy};
use parkside_core::pagination;
use parkside_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::property::{CreateProperty, Property, UpdateProperty};
use crate::models::status::{PropertyStatus, StatusId};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, status_id, views, payload, created_at, updated_at";

/// Owned bind value for the dynamically built search query.
enum Bind {
    Text(String),
    Int(i64),
    Real(f64),
}

/// Provides CRUD and search operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateProperty,
        status_id: StatusId,
    ) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (title, status_id, payload)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.title)
            .bind(status_id)
            .bind(sqlx::types::Json(&input.payload))
            .fetch_one(pool)
            .await
    }

    /// Find a property by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a property. Only non-`None` fields in `input` are applied; a
    /// present payload replaces the stored one wholesale.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProperty,
        status_id: Option<StatusId>,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                title = COALESCE($2, title),
                status_id = COALESCE($3, status_id),
                payload = COALESCE($4, payload),
                updated_at = datetime('now')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(status_id)
            .bind(input.payload.as_ref().map(sqlx::types::Json))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a property by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bump the views counter for a public detail read.
    pub async fn increment_views(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE properties SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Marketplace search: only `Active` listings are eligible unless the
    /// status filter explicitly overrides.
    ///
    /// Returns the matching page plus the total match count.
    pub async fn search(
        pool: &SqlitePool,
        filters: &SearchFilters,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Property>, i64), sqlx::Error> {
        Self::run_search(pool, filters, true, page, limit).await
    }

    /// Back-office search: no default status constraint; the status filter,
    /// when present, still applies.
    pub async fn search_all_statuses(
        pool: &SqlitePool,
        filters: &SearchFilters,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Property>, i64), sqlx::Error> {
        Self::run_search(pool, filters, false, page, limit).await
    }

    /// Build and run the filtered search query.
    ///
    /// Every present filter narrows the result set; absent fields impose no
    /// constraint. String-valued filters are bound raw, so values outside
    /// the known vocabulary match nothing rather than erroring.
    async fn run_search(
        pool: &SqlitePool,
        filters: &SearchFilters,
        active_default: bool,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Property>, i64), sqlx::Error> {
        // Dynamic WHERE clause: conditions vector + positional bind values.
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<Bind> = Vec::new();

        match &filters.status {
            Some(label) => {
                // Explicit status filter overrides the Active-only default.
                // An unknown label resolves to no status and matches nothing.
                binds.push(Bind::Text(label.clone()));
                conditions.push(format!(
                    "status_id = (SELECT id FROM property_statuses WHERE name = ${})",
                    binds.len()
                ));
            }
            None if active_default => {
                binds.push(Bind::Int(i64::from(PropertyStatus::Active.id())));
                conditions.push(format!("status_id = ${}", binds.len()));
            }
            None => {}
        }

        if let Some(q) = &filters.q {
            binds.push(Bind::Text(q.clone()));
            conditions.push(format!(
                "lower(title) LIKE '%' || lower(${}) || '%'",
                binds.len()
            ));
        }

        // Exact-match payload attributes.
        for (path, value) in [
            ("$.category", &filters.category),
            ("$.purpose", &filters.purpose),
            ("$.location.city", &filters.city),
            ("$.location.locality", &filters.locality),
            ("$.furnishing", &filters.furnishing),
        ] {
            if let Some(value) = value {
                binds.push(Bind::Text(value.clone()));
                conditions.push(format!(
                    "json_extract(payload, '{path}') = ${}",
                    binds.len()
                ));
            }
        }

        for (path, value) in [
            ("$.bedrooms", filters.bedrooms),
            ("$.bathrooms", filters.bathrooms),
        ] {
            if let Some(value) = value {
                binds.push(Bind::Int(value));
                conditions.push(format!(
                    "json_extract(payload, '{path}') = ${}",
                    binds.len()
                ));
            }
        }

        // Range filters, inclusive on both ends.
        for (path, op, value) in [
            ("$.price", ">=", filters.min_price),
            ("$.price", "<=", filters.max_price),
            ("$.area", ">=", filters.min_area),
            ("$.area", "<=", filters.max_area),
        ] {
            if let Some(value) = value {
                binds.push(Bind::Real(value));
                conditions.push(format!(
                    "json_extract(payload, '{path}') {op} ${}",
                    binds.len()
                ));
            }
        }

        // Set-membership filters: any-overlap between the requested values
        // and the payload's list.
        for (path, values) in [
            ("$.amenities", &filters.amenities),
            ("$.businessType", &filters.business_type),
        ] {
            if let Some(values) = values {
                let mut placeholders: Vec<String> = Vec::with_capacity(values.len());
                for value in values {
                    binds.push(Bind::Text(value.clone()));
                    placeholders.push(format!("${}", binds.len()));
                }
                conditions.push(format!(
                    "EXISTS (SELECT 1 FROM json_each(payload, '{path}') \
                     WHERE json_each.value IN ({}))",
                    placeholders.join(", ")
                ));
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // Every ordering tie-breaks by id so pagination stays deterministic.
        let order_clause = match filters.sort_by {
            SortBy::Newest => "created_at DESC, id DESC",
            SortBy::PriceAsc => "json_extract(payload, '$.price') ASC, id ASC",
            SortBy::PriceDesc => "json_extract(payload, '$.price') DESC, id ASC",
            SortBy::Views => "views DESC, id ASC",
        };

        let count_query = format!("SELECT COUNT(*) FROM properties {where_clause}");
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        for bind in &binds {
            count = match bind {
                Bind::Text(v) => count.bind(v),
                Bind::Int(v) => count.bind(*v),
                Bind::Real(v) => count.bind(*v),
            };
        }
        let total = count.fetch_one(pool).await?;

        let page_query = format!(
            "SELECT {COLUMNS} FROM properties {where_clause} \
             ORDER BY {order_clause} \
             LIMIT ${} OFFSET ${}",
            binds.len() + 1,
            binds.len() + 2,
        );
        let mut rows = sqlx::query_as::<_, Property>(&page_query);
        for bind in &binds {
            rows = match bind {
                Bind::Text(v) => rows.bind(v),
                Bind::Int(v) => rows.bind(*v),
                Bind::Real(v) => rows.bind(*v),
            };
        }
        let properties = rows
            .bind(limit)
            .bind(pagination::offset(page, limit))
            .fetch_all(pool)
            .await?;

        Ok((properties, total))
    }
}
