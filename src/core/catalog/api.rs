//! Catalog API endpoints
//!
//! - GET /catalog - every category at once
//! - GET /catalog/{category} - options of one reference category
//!
//! Query parameters: `search` (name substring), `coordinator_id` (leaders),
//! `municipality_id` (neighborhoods).

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::api::ApiError;
use crate::core::catalog::{
    CatalogCategory, CatalogOption, CatalogQuery, Directory, DirectoryError, OptionSet,
};

#[derive(Clone)]
pub struct CatalogApiState {
    pub directory: Directory,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub search: Option<String>,
    pub coordinator_id: Option<i32>,
    pub municipality_id: Option<i32>,
}

impl CatalogParams {
    /// Only the parent filter matching the category applies
    pub fn into_query(self, category: CatalogCategory) -> CatalogQuery {
        let parent_id = match category {
            CatalogCategory::Leaders => self.coordinator_id,
            CatalogCategory::Neighborhoods => self.municipality_id,
            _ => None,
        };

        CatalogQuery {
            category,
            search: self.search,
            parent_id,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogApiError {
    #[error("Catálogo desconocido: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl IntoResponse for CatalogApiError {
    fn into_response(self) -> Response {
        match &self {
            CatalogApiError::UnknownCategory(_) => {
                ApiError::respond(StatusCode::NOT_FOUND, self.to_string(), "UNKNOWN_CATALOG")
            }
            CatalogApiError::Directory(err) => {
                tracing::error!("Catalog lookup failed: {}", err);
                ApiError::respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error consultando el catálogo",
                    "INTERNAL_ERROR",
                )
            }
        }
    }
}

pub fn catalog_router(state: CatalogApiState) -> Router {
    Router::new()
        .route("/catalog", get(snapshot_handler))
        .route("/catalog/{category}", get(list_handler))
        .with_state(Arc::new(state))
}

/// GET /catalog
async fn snapshot_handler(
    State(state): State<Arc<CatalogApiState>>,
) -> Result<Json<OptionSet>, CatalogApiError> {
    Ok(Json(state.directory.snapshot().await?))
}

/// GET /catalog/{category}
async fn list_handler(
    State(state): State<Arc<CatalogApiState>>,
    Path(slug): Path<String>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<Vec<CatalogOption>>, CatalogApiError> {
    let category =
        CatalogCategory::from_slug(&slug).ok_or(CatalogApiError::UnknownCategory(slug))?;

    let query = params.into_query(category);
    tracing::debug!(
        "Catalog lookup: category={}, parent={:?}, search={:?}",
        category,
        query.parent_id,
        query.search
    );

    let options = state.directory.options(&query).await?;

    Ok(Json(options))
}
