//! Pizza catalog handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use uuid::Uuid;

use forno_core::{PizzaDraft, PizzaId, PizzaRecord};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the pizzas router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pizzas", get(list).post(create))
        .route("/api/pizzas/{id}", get(get_one).put(update).delete(remove))
}

/// List the merged pizza catalog.
pub async fn list(State(state): State<AppState>) -> Json<Vec<PizzaRecord>> {
    let store = state.store().read().await;
    Json(store.pizzas().to_vec())
}

/// Fetch a single pizza.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the ID is not in the catalog.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PizzaRecord>> {
    let store = state.store().read().await;
    store
        .pizzas()
        .iter()
        .find(|p| p.id == PizzaId::from_uuid(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("pizza {id}")))
}

/// Create a pizza from the console form.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PizzaDraft>,
) -> (StatusCode, Json<PizzaRecord>) {
    let record = state.store().write().await.add_pizza(draft);
    (StatusCode::CREATED, Json(record))
}

/// Replace the editable fields of a pizza. Unknown IDs are a no-op.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<PizzaDraft>,
) -> Response {
    let updated = state
        .store()
        .write()
        .await
        .edit_pizza(PizzaId::from_uuid(id), draft);
    match updated {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Delete a pizza. Unknown IDs are a no-op.
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    state.store().write().await.delete_pizza(PizzaId::from_uuid(id));
    StatusCode::NO_CONTENT
}
