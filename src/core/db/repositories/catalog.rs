//! Catalog repository
//!
//! Read-only access to the reference tables behind the select fields.

use sqlx::PgPool;

use crate::core::catalog::{CatalogCategory, CatalogOption, CatalogQuery, SEARCH_LIMIT};
use crate::core::db::models::ReferenceRow;

#[derive(Debug, thiserror::Error)]
pub enum CatalogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Table, parent column expression and optional limit per category.
/// `$1` parent id, `$2` search term, `$3` limit (NULL = unlimited).
fn list_sql(category: CatalogCategory) -> &'static str {
    match category {
        CatalogCategory::Leaders => {
            r#"
            SELECT id, name, coordinator_id AS parent_id
            FROM leader
            WHERE ($1::int IS NULL OR coordinator_id = $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY name
            LIMIT $3
            "#
        }
        CatalogCategory::Coordinators => {
            r#"
            SELECT id, name, NULL::int AS parent_id
            FROM coordinators
            WHERE $1::int IS NULL
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY name
            LIMIT $3
            "#
        }
        CatalogCategory::Municipalities => {
            r#"
            SELECT id, name, NULL::int AS parent_id
            FROM municipality
            WHERE $1::int IS NULL
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY name
            LIMIT $3
            "#
        }
        CatalogCategory::Neighborhoods => {
            r#"
            SELECT id, name, id_municipality AS parent_id
            FROM neighborhood
            WHERE ($1::int IS NULL OR id_municipality = $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY name
            LIMIT $3
            "#
        }
    }
}

fn exists_sql(category: CatalogCategory) -> &'static str {
    match category {
        CatalogCategory::Leaders => "SELECT EXISTS(SELECT 1 FROM leader WHERE id = $1)",
        CatalogCategory::Coordinators => "SELECT EXISTS(SELECT 1 FROM coordinators WHERE id = $1)",
        CatalogCategory::Municipalities => {
            "SELECT EXISTS(SELECT 1 FROM municipality WHERE id = $1)"
        }
        CatalogCategory::Neighborhoods => "SELECT EXISTS(SELECT 1 FROM neighborhood WHERE id = $1)",
    }
}

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Options of one category, filtered the same way as [`CatalogQuery::apply`]
    pub async fn list(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<CatalogOption>, CatalogRepositoryError> {
        let limit = query
            .category
            .is_searchable()
            .then_some(SEARCH_LIMIT as i64);

        let rows = sqlx::query_as::<_, ReferenceRow>(list_sql(query.category))
            .bind(query.parent_id)
            .bind(query.needle())
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(CatalogOption::from).collect())
    }

    pub async fn exists(
        &self,
        category: CatalogCategory,
        id: i32,
    ) -> Result<bool, CatalogRepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(exists_sql(category))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Municipality a neighborhood belongs to
    pub async fn neighborhood_municipality(
        &self,
        neighborhood_id: i32,
    ) -> Result<Option<i32>, CatalogRepositoryError> {
        let municipality = sqlx::query_scalar::<_, i32>(
            "SELECT id_municipality FROM neighborhood WHERE id = $1",
        )
        .bind(neighborhood_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(municipality)
    }
}
