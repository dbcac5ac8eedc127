//! Integration tests for the transactional stock-out transition.

use assert_matches::assert_matches;
use sqlx::PgPool;
use stockroom_core::types::DbId;
use stockroom_db::models::item::{CreateItem, Item};
use stockroom_db::models::stock::{CreateStockBatch, NewStockEntry};
use stockroom_db::models::stock_out::{CreateStockOut, TransitionOutcome};
use stockroom_db::repositories::{ItemRepo, StockOutRepo, StockRepo};

async fn seed(pool: &PgPool) -> (Item, DbId) {
    let item = ItemRepo::create(
        pool,
        &CreateItem {
            name: "OptiPlex 7090".into(),
            category: "PC".into(),
            brand: "Dell".into(),
            model: "7090".into(),
        },
    )
    .await
    .unwrap();
    let created = StockRepo::create_batch(
        pool,
        &CreateStockBatch {
            item_id: item.id,
            entries: vec![NewStockEntry {
                serial_number: Some("SN1".into()),
                asset_id: Some("AST1".into()),
                location: Some("Warehouse A".into()),
            }],
        },
    )
    .await
    .unwrap();
    (item, created[0].unit.id)
}

fn deploy(stock_id: DbId, item_id: Option<DbId>) -> CreateStockOut {
    CreateStockOut {
        stock_id,
        item_id,
        staff_id: Some("EMP01".into()),
        deployment_location: Some("Floor 3".into()),
        deployment_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_transition_moves_unit(pool: PgPool) {
    let (item, stock_id) = seed(&pool).await;

    let outcome = StockOutRepo::transition(&pool, &deploy(stock_id, Some(item.id)))
        .await
        .unwrap();

    let TransitionOutcome::Deployed(record) = outcome else {
        panic!("expected Deployed, got {outcome:?}");
    };
    assert_eq!(record.stock_id, stock_id);
    assert_eq!(record.item_id, item.id);
    assert_eq!(record.item_name, "OptiPlex 7090");
    assert_eq!(record.serial_number.as_deref(), Some("SN1"));
    assert_eq!(record.asset_id.as_deref(), Some("AST1"));
    assert_eq!(record.location.as_deref(), Some("Warehouse A"));
    assert_eq!(record.staff_id.as_deref(), Some("EMP01"));

    assert!(StockRepo::find_by_id(&pool, stock_id).await.unwrap().is_none());
    assert_eq!(StockOutRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replayed_transition_is_not_found(pool: PgPool) {
    let (_, stock_id) = seed(&pool).await;

    let first = StockOutRepo::transition(&pool, &deploy(stock_id, None)).await.unwrap();
    assert_matches!(first, TransitionOutcome::Deployed(_));

    let second = StockOutRepo::transition(&pool, &deploy(stock_id, None)).await.unwrap();
    assert_matches!(second, TransitionOutcome::StockNotFound);
    assert_eq!(StockOutRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_item_mismatch_rolls_back(pool: PgPool) {
    let (item, stock_id) = seed(&pool).await;

    let outcome = StockOutRepo::transition(&pool, &deploy(stock_id, Some(item.id + 1000)))
        .await
        .unwrap();

    assert_matches!(outcome, TransitionOutcome::ItemMismatch { stock_item_id } if stock_item_id == item.id);
    assert!(StockRepo::find_by_id(&pool, stock_id).await.unwrap().is_some());
    assert!(StockOutRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_transitions_deploy_once(pool: PgPool) {
    let (_, stock_id) = seed(&pool).await;

    let a = deploy(stock_id, None);
    let b = deploy(stock_id, None);
    let (ra, rb) = tokio::join!(
        StockOutRepo::transition(&pool, &a),
        StockOutRepo::transition(&pool, &b),
    );

    let deployed = [ra.unwrap(), rb.unwrap()]
        .into_iter()
        .filter(|o| matches!(o, TransitionOutcome::Deployed(_)))
        .count();
    assert_eq!(deployed, 1);
    assert_eq!(StockOutRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_history_survives_item_deletion(pool: PgPool) {
    let (item, stock_id) = seed(&pool).await;
    StockOutRepo::transition(&pool, &deploy(stock_id, None)).await.unwrap();

    assert!(ItemRepo::delete(&pool, item.id).await.unwrap());

    let history = StockOutRepo::list(&pool).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].item_name, "OptiPlex 7090");
}
