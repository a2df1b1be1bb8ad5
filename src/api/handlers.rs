//! API Handlers
//!
//! HTTP request handlers for each item service endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{DeleteResponse, HealthResponse, ItemRequest, ItemView, StatsResponse};
use crate::service::ItemService;

/// Application state shared across all handlers.
///
/// Built once at startup; cloning only bumps the reference count.
#[derive(Clone)]
pub struct AppState {
    /// Item operations over the database and cache
    pub service: Arc<ItemService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: ItemService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Parses the `{item_id}` path segment. Anything that is not an integer id
/// cannot name an item, so it is reported as not found.
fn parse_item_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound)
}

fn parse_body(payload: std::result::Result<Json<ItemRequest>, JsonRejection>) -> Result<ItemRequest> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))
}

/// Handler for POST /items/
///
/// Creates an item and echoes its fields with 201.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemView>)> {
    let req = parse_body(payload)?;
    let item = state.service.create(&req).await?;

    Ok((StatusCode::CREATED, Json(ItemView::from(item))))
}

/// Handler for GET /items/{item_id}
pub async fn read_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemView>> {
    let id = parse_item_id(&item_id)?;
    let view = state.service.read(id).await?;

    Ok(Json(view))
}

/// Handler for PUT /items/{item_id}
///
/// Responds with the new fields.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    payload: std::result::Result<Json<ItemRequest>, JsonRejection>,
) -> Result<Json<ItemView>> {
    let id = parse_item_id(&item_id)?;
    let req = parse_body(payload)?;
    let item = state.service.update(id, &req).await?;

    Ok(Json(ItemView::from(item)))
}

/// Handler for DELETE /items/{item_id}
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = parse_item_id(&item_id)?;
    state.service.delete(id).await?;

    Ok(Json(DeleteResponse::deleted()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.stats()))
}

/// Fallback for paths no route matches.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// Handler for GET /health
///
/// 200 when Postgres and Redis both answer, 503 otherwise.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (database, cache) = state.service.health().await;
    let response = HealthResponse::new(database, cache);
    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
