//! JSON API behavior over a fully wired console.
//!
//! The console under test runs the real startup sequence against a stub
//! catalog server and a temp-dir local store, then the tests drive it over
//! HTTP with `reqwest` the way the console's forms do.

use reqwest::StatusCode;
use serde_json::json;

use forno_core::{OrderRecord, PizzaRecord, StockItem};
use forno_integration_tests::{catalog_envelope, fixture_pizza, spawn_catalog_stub, spawn_console};

const MARGHERITA_ID: &str = "11111111-1111-4111-8111-111111111111";

async fn console_with_margherita() -> (tempfile::TempDir, String) {
    let remote = vec![fixture_pizza(MARGHERITA_ID, "Margherita", "32.50")];
    let catalog_url = spawn_catalog_stub(catalog_envelope(&remote)).await;
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_console(dir.path(), &catalog_url).await;
    (dir, base_url)
}

#[tokio::test]
async fn catalog_lists_the_merged_view() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();

    let pizzas: Vec<PizzaRecord> = client
        .get(format!("{base_url}/api/pizzas"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(pizzas.len(), 1);
    assert_eq!(pizzas[0].name, "Margherita");
}

#[tokio::test]
async fn order_creation_computes_the_total_from_the_catalog() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({
            "customer": "Ana",
            "phone": "11 99999-0000",
            "address": "Rua das Flores 12",
            "pizza": "Margherita",
            "quantity": 3
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let order: OrderRecord = response.json().await.unwrap();
    assert_eq!(order.total.to_string(), "97.50");
    assert_eq!(order.status.to_string(), "pending");
}

#[tokio::test]
async fn status_update_replaces_only_the_status_field() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();

    let created: OrderRecord = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({
            "customer": "Bruno",
            "phone": "11 98888-1111",
            "address": "Av. Central 99",
            "pizza": "Margherita",
            "quantity": 1
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let updated: OrderRecord = client
        .patch(format!("{base_url}/api/orders/{}/status", created.id))
        .json(&json!({ "status": "out_for_delivery" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(updated.status.to_string(), "out_for_delivery");
    let reverted = OrderRecord {
        status: created.status,
        ..updated
    };
    assert_eq!(reverted, created);
}

#[tokio::test]
async fn unknown_status_string_answers_bad_request() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();

    let response = client
        .patch(format!(
            "{base_url}/api/orders/{}/status",
            uuid::Uuid::new_v4()
        ))
        .json(&json!({ "status": "delivered" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edits_and_deletes_of_unknown_ids_are_silent_noops() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();
    let ghost = uuid::Uuid::new_v4();

    let edit = client
        .put(format!("{base_url}/api/pizzas/{ghost}"))
        .json(&json!({
            "name": "Fantasma",
            "price": { "amount": "1" },
            "available": false
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(edit.status(), StatusCode::NO_CONTENT);

    let delete = client
        .delete(format!("{base_url}/api/orders/{ghost}"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    // The catalog is untouched.
    let pizzas: Vec<PizzaRecord> = client
        .get(format!("{base_url}/api/pizzas"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pizzas.len(), 1);
}

#[tokio::test]
async fn missing_pizza_answers_not_found() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base_url}/api/pizzas/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn first_run_seeds_the_default_stock_list() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();

    let stock: Vec<StockItem> = client
        .get(format!("{base_url}/api/stock"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stock.len(), 7);
    assert!(stock.iter().any(|item| item.ingredient == "Mussarela"));
    // The seed is healthy, so nothing is low yet.
    let low: Vec<StockItem> = client
        .get(format!("{base_url}/api/stock/low"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(low.is_empty());
}

#[tokio::test]
async fn stock_quantity_update_drives_the_low_stock_signal() {
    let (_dir, base_url) = console_with_margherita().await;
    let client = reqwest::Client::new();

    let stock: Vec<StockItem> = client
        .get(format!("{base_url}/api/stock"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let mussarela = stock
        .iter()
        .find(|item| item.ingredient == "Mussarela")
        .unwrap();

    let response = client
        .patch(format!("{base_url}/api/stock/{}/quantity", mussarela.id))
        .json(&json!({ "quantity": "15" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let low: Vec<StockItem> = client
        .get(format!("{base_url}/api/stock/low"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].ingredient, "Mussarela");
}
