//! Stock handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, put},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use forno_core::{StockItem, StockItemDraft, StockItemId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the stock router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stock", get(list).post(create))
        .route("/api/stock/low", get(low))
        .route("/api/stock/{id}", get(get_one).put(update).delete(remove))
        .route("/api/stock/{id}/quantity", patch(update_quantity))
}

/// Request body for the quantity-only update.
#[derive(Debug, Deserialize)]
pub struct QuantityUpdateRequest {
    pub quantity: Decimal,
}

/// List all stock items.
pub async fn list(State(state): State<AppState>) -> Json<Vec<StockItem>> {
    let store = state.store().read().await;
    Json(store.stock().to_vec())
}

/// List items at or below their minimum threshold.
pub async fn low(State(state): State<AppState>) -> Json<Vec<StockItem>> {
    let store = state.store().read().await;
    Json(store.low_stock())
}

/// Fetch a single stock item.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the ID is unknown.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StockItem>> {
    let store = state.store().read().await;
    store
        .stock()
        .iter()
        .find(|i| i.id == StockItemId::from_uuid(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("stock item {id}")))
}

/// Add a stock item.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<StockItemDraft>,
) -> (StatusCode, Json<StockItem>) {
    let item = state.store().write().await.add_stock_item(draft);
    (StatusCode::CREATED, Json(item))
}

/// Replace the editable fields of a stock item. Unknown IDs are a no-op.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<StockItemDraft>,
) -> Response {
    let updated = state
        .store()
        .write()
        .await
        .edit_stock_item(StockItemId::from_uuid(id), draft);
    match updated {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Delete a stock item. Unknown IDs are a no-op.
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    state
        .store()
        .write()
        .await
        .delete_stock_item(StockItemId::from_uuid(id));
    StatusCode::NO_CONTENT
}

/// Replace only the quantity field of a stock item. Unknown IDs are a no-op.
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<QuantityUpdateRequest>,
) -> Response {
    let updated = state
        .store()
        .write()
        .await
        .update_stock_quantity(StockItemId::from_uuid(id), body.quantity);
    match updated {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
