//! Repository for the `stock_out` table and the stock-out transition.

use sqlx::PgPool;

use crate::models::stock::StockUnitDetail;
use crate::models::stock_out::{CreateStockOut, StockOutRecord, TransitionOutcome};

const COLUMNS: &str = "id, stock_id, item_id, item_name, item_category, item_brand, item_model, \
                       serial_number, asset_id, location, staff_id, deployment_location, \
                       deployment_date, stock_out_date";

/// Provides read access to deployment history and the move out of stock.
pub struct StockOutRepo;

impl StockOutRepo {
    /// List deployment history, most recent stock-out first.
    pub async fn list(pool: &PgPool) -> Result<Vec<StockOutRecord>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM stock_out ORDER BY stock_out_date DESC, id DESC");
        sqlx::query_as::<_, StockOutRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// Move one unit from `stock` to `stock_out`.
    ///
    /// The lookup, history insert and stock delete run in one transaction.
    /// The stock row is locked with `FOR UPDATE`, so a concurrent transition
    /// on the same unit blocks until this one commits and then sees no row.
    /// Every non-`Deployed` outcome rolls back.
    pub async fn transition(
        pool: &PgPool,
        input: &CreateStockOut,
    ) -> Result<TransitionOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let unit = sqlx::query_as::<_, StockUnitDetail>(
            "SELECT s.id, s.item_id, s.serial_number, s.asset_id, s.location, \
                    s.staff_id, s.deployment_location, s.deployment_date, s.created_at, \
                    i.name AS item_name, i.category AS item_category, \
                    i.brand AS item_brand, i.model AS item_model \
             FROM stock s JOIN items i ON i.id = s.item_id \
             WHERE s.id = $1 \
             FOR UPDATE OF s",
        )
        .bind(input.stock_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(unit) = unit else {
            return Ok(TransitionOutcome::StockNotFound);
        };

        if input.item_id.is_some_and(|id| id != unit.unit.item_id) {
            return Ok(TransitionOutcome::ItemMismatch {
                stock_item_id: unit.unit.item_id,
            });
        }

        let insert = format!(
            "INSERT INTO stock_out
                (stock_id, item_id, item_name, item_category, item_brand, item_model,
                 serial_number, asset_id, location, staff_id, deployment_location, deployment_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, StockOutRecord>(&insert)
            .bind(unit.unit.id)
            .bind(unit.unit.item_id)
            .bind(&unit.item_name)
            .bind(&unit.item_category)
            .bind(&unit.item_brand)
            .bind(&unit.item_model)
            .bind(&unit.unit.serial_number)
            .bind(&unit.unit.asset_id)
            .bind(&unit.unit.location)
            .bind(&input.staff_id)
            .bind(&input.deployment_location)
            .bind(input.deployment_date)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM stock WHERE id = $1")
            .bind(unit.unit.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            stock_id = record.stock_id,
            stock_out_id = record.id,
            "Stock unit moved to stock-out"
        );
        Ok(TransitionOutcome::Deployed(record))
    }
}
