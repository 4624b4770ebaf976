mod common;

use axum::{Json, extract::State};
use gestor_criativo_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    let state = common::memory_state().await;
    let Json(response) = health_check(State(state)).await;
    assert_eq!(response.message, "Health check");

    let data = response.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.products, 0);
    assert_eq!(data.orders, 0);
}
