//! Handlers for the item resource.
//!
//! Field validation runs here, before any service call; the service
//! layer only ever sees well-formed input.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::item::{validate_item_description, validate_item_name};
use catalog_core::types::DbId;
use catalog_db::models::item::{CreateItem, UpdateItem};

use crate::error::AppResult;
use crate::services::ItemService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for listing items.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsParams {
    /// When true, only items with `active = true` are returned.
    #[serde(default)]
    pub active_only: bool,
}

/// Query parameters for substring search.
#[derive(Debug, serde::Deserialize)]
pub struct SearchItemsParams {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /items?activeOnly=bool
///
/// List all items, or only active ones.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ListItemsParams>,
) -> AppResult<impl IntoResponse> {
    let items = if params.active_only {
        ItemService::get_active_items(&state.pool).await?
    } else {
        ItemService::get_all_items(&state.pool).await?
    };

    Ok(Json(items))
}

/// GET /items/search?name=term
///
/// Search items whose name contains the term (case-insensitive).
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchItemsParams>,
) -> AppResult<impl IntoResponse> {
    let items = ItemService::search_by_name(&state.pool, &params.name).await?;
    Ok(Json(items))
}

/// GET /items/{id}
///
/// Get a single item by ID.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ItemService::get_item_by_id(&state.pool, id).await?;
    Ok(Json(item))
}

/// POST /items
///
/// Create a new item.
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<impl IntoResponse> {
    validate_item_name(&input.name)?;
    if let Some(ref description) = input.description {
        validate_item_description(description)?;
    }

    let item = ItemService::create_item(&state.pool, input).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/{id}
///
/// Partially update an item: absent or null fields keep their stored
/// values.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        validate_item_name(name)?;
    }
    if let Some(ref description) = input.description {
        validate_item_description(description)?;
    }

    let item = ItemService::update_item(&state.pool, id, input).await?;
    Ok(Json(item))
}

/// DELETE /items/{id}
///
/// Delete an item. 204 on success, 404 if the id does not exist.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ItemService::delete_item(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
