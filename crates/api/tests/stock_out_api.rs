//! HTTP-level tests for the stock-out transition.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{add_stock, body_json, create_item, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use stockroom_events::EventBus;

fn deployment(stock_id: i64) -> serde_json::Value {
    json!({
        "stock_id": stock_id,
        "staff_id": "EMP01",
        "deployment_location": "Floor 3",
        "deployment_date": "2024-01-01",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_end_to_end_deployment(pool: PgPool) {
    let item_id = create_item(&pool, "OptiPlex 7090", "PC").await;
    let ids = add_stock(
        &pool,
        item_id,
        json!([{"serial_number": "SN1", "asset_id": "AST1", "location": "Warehouse A"}]),
    )
    .await;

    let inventory =
        body_json(get(common::build_test_app(pool.clone()), "/api/v1/inventory").await).await;
    assert_eq!(inventory["data"][0]["quantity"], 1);
    let before = body_json(get(common::build_test_app(pool.clone()), "/api/v1/stats").await).await;
    let before_total = before["data"]["totalQuantity"].as_i64().unwrap();

    let mut body = deployment(ids[0]);
    body["item_id"] = json!(item_id);
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/stock-out", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let record = body_json(response).await;
    assert_eq!(record["data"]["item_name"], "OptiPlex 7090");
    assert_eq!(record["data"]["serial_number"], "SN1");
    assert_eq!(record["data"]["asset_id"], "AST1");

    let inventory =
        body_json(get(common::build_test_app(pool.clone()), "/api/v1/inventory").await).await;
    assert_eq!(inventory["data"][0]["quantity"], 0);
    let after = body_json(get(common::build_test_app(pool.clone()), "/api/v1/stats").await).await;
    assert_eq!(
        after["data"]["totalQuantity"].as_i64().unwrap(),
        before_total - 1
    );

    let history = body_json(get(common::build_test_app(pool), "/api/v1/stock-out").await).await;
    let records = history["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["staff_id"], "EMP01");
    assert_eq!(records[0]["deployment_location"], "Floor 3");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_replayed_transition_returns_404(pool: PgPool) {
    let item_id = create_item(&pool, "OptiPlex", "PC").await;
    let ids = add_stock(&pool, item_id, json!([{"serial_number": "SN1"}])).await;

    let first = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/stock-out",
        deployment(ids[0]),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/stock-out",
        deployment(ids[0]),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let history = body_json(get(common::build_test_app(pool), "/api/v1/stock-out").await).await;
    assert_eq!(history["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mismatched_item_returns_400_and_keeps_unit(pool: PgPool) {
    let item_id = create_item(&pool, "OptiPlex", "PC").await;
    let other_id = create_item(&pool, "Latitude", "Laptop").await;
    let ids = add_stock(&pool, item_id, json!([{"serial_number": "SN1"}])).await;

    let mut body = deployment(ids[0]);
    body["item_id"] = json!(other_id);
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/stock-out", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let unit = get(
        common::build_test_app(pool),
        &format!("/api/v1/stock/{}", ids[0]),
    )
    .await;
    assert_eq!(unit.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deployment_publishes_event(pool: PgPool) {
    let item_id = create_item(&pool, "OptiPlex", "PC").await;
    let ids = add_stock(&pool, item_id, json!([{"serial_number": "SN1"}])).await;

    let bus = Arc::new(EventBus::default());
    let mut rx = bus.subscribe();
    let app = common::build_test_app_with_bus(pool, Arc::clone(&bus));

    let response = post_json(app, "/api/v1/stock-out", deployment(ids[0])).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let event = rx.try_recv().expect("a stock.deployed event");
    assert_eq!(event.event_type, "stock.deployed");
    assert_eq!(event.entity_id, Some(ids[0]));
    assert_eq!(event.payload["staff_id"], "EMP01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deployed_unit_is_found_in_stock_out_by_search(pool: PgPool) {
    let item_id = create_item(&pool, "OptiPlex", "PC").await;
    let ids = add_stock(&pool, item_id, json!([{"serial_number": "SN-DEPLOYED"}])).await;
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/stock-out",
        deployment(ids[0]),
    )
    .await;

    let json = body_json(
        get(common::build_test_app(pool), "/api/v1/search?term=sn-deployed").await,
    )
    .await;
    assert_eq!(json["data"]["location"], "stock_out");
    assert_eq!(json["data"]["stock_out"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_stock_id_is_enveloped_validation_error(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/stock-out",
        json!({"staff_id": "EMP01"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("stock_id"));
}
