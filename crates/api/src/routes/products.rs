//! Product list, create and update endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use catalog_store::{CatalogStore, PageRequest};
use common::ProductId;
use domain::{ProductInput, ProductRecord};
use serde::{Deserialize, Serialize};
use sync::{SyncCoordinator, SyncError};
use webflow::ExternalCatalog;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CatalogStore, E: ExternalCatalog> {
    pub coordinator: SyncCoordinator<S, E>,
}

// -- Request types --

/// Raw pagination parameters. Kept as strings so that unparseable values
/// fall back to the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductRecord>,
    pub pagination: PaginationResponse,
}

#[derive(Serialize)]
pub struct PaginationResponse {
    pub current: u32,
    pub pages: u64,
    pub total: u64,
}

// -- Handlers --

/// GET /products: a page of products, newest first.
#[tracing::instrument(skip(state))]
pub async fn list<S, E>(
    State(state): State<Arc<AppState<S, E>>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ProductListResponse>, ApiError>
where
    S: CatalogStore + 'static,
    E: ExternalCatalog + 'static,
{
    let request = PageRequest::from_query(params.page.as_deref(), params.limit.as_deref());
    let page = state.coordinator.store().list(request).await?;

    let pagination = PaginationResponse {
        current: page.current(),
        pages: page.pages(),
        total: page.total,
    };

    Ok(Json(ProductListResponse {
        products: page.items,
        pagination,
    }))
}

/// POST /products: create a product and its external mirror.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S, E>(
    State(state): State<Arc<AppState<S, E>>>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductRecord>), ApiError>
where
    S: CatalogStore + 'static,
    E: ExternalCatalog + 'static,
{
    let Json(input) = payload?;
    let record = state.coordinator.create(input).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /products/{id}: update a product; the external mirror is best-effort.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S, E>(
    State(state): State<Arc<AppState<S, E>>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<ProductRecord>, ApiError>
where
    S: CatalogStore + 'static,
    E: ExternalCatalog + 'static,
{
    let Json(input) = payload?;
    input.validate().map_err(SyncError::from)?;

    // No stored product can carry an id that is not a UUID
    let Ok(product_id) = id.parse::<ProductId>() else {
        return Err(ApiError::NotFound("Product not found".to_string()));
    };

    // A failed mirror has already been logged by the coordinator
    let outcome = state.coordinator.update(product_id, input).await?;

    Ok(Json(outcome.record))
}
