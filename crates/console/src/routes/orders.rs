//! Order handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, put},
};
use serde::Deserialize;
use uuid::Uuid;

use forno_core::{OrderDraft, OrderId, OrderRecord, OrderStatus};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list).post(create))
        .route("/api/orders/{id}", get(get_one).put(update).delete(remove))
        .route("/api/orders/{id}/status", patch(update_status))
}

/// Request body for the status-only update.
///
/// The status arrives as the wire string (e.g. `"out_for_delivery"`) and is
/// parsed here so an unknown value answers 400 rather than a serde rejection.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// List all orders.
pub async fn list(State(state): State<AppState>) -> Json<Vec<OrderRecord>> {
    let store = state.store().read().await;
    Json(store.orders().to_vec())
}

/// Fetch a single order.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the ID is unknown.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderRecord>> {
    let store = state.store().read().await;
    store
        .orders()
        .iter()
        .find(|o| o.id == OrderId::from_uuid(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))
}

/// Create an order; the total is computed from the catalog here and never
/// again.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> (StatusCode, Json<OrderRecord>) {
    let record = state.store().write().await.add_order(draft);
    (StatusCode::CREATED, Json(record))
}

/// Replace the editable fields of an order. Unknown IDs are a no-op.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<OrderDraft>,
) -> Response {
    let updated = state
        .store()
        .write()
        .await
        .edit_order(OrderId::from_uuid(id), draft);
    match updated {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Delete an order. Unknown IDs are a no-op.
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    state.store().write().await.delete_order(OrderId::from_uuid(id));
    StatusCode::NO_CONTENT
}

/// Replace only the status field of an order. Unknown IDs are a no-op.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a status string outside the
/// enumeration.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Response> {
    let status = body
        .status
        .parse::<OrderStatus>()
        .map_err(AppError::BadRequest)?;
    let updated = state
        .store()
        .write()
        .await
        .update_order_status(OrderId::from_uuid(id), status);
    Ok(match updated {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
