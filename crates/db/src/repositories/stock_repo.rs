//! Repository for the `stock` table.

use sqlx::PgPool;
use stockroom_core::types::DbId;

use crate::models::stock::{CreateStockBatch, StockUnit, StockUnitDetail, UpdateStockUnit};

/// Plain column list for `stock` rows.
const COLUMNS: &str = "id, item_id, serial_number, asset_id, location, staff_id, \
                       deployment_location, deployment_date, created_at";

/// Columns for a stock row (aliased `s`) joined with its item (aliased `i`).
const DETAIL_COLUMNS: &str = "s.id, s.item_id, s.serial_number, s.asset_id, s.location, \
                              s.staff_id, s.deployment_location, s.deployment_date, s.created_at, \
                              i.name AS item_name, i.category AS item_category, \
                              i.brand AS item_brand, i.model AS item_model";

/// Provides CRUD operations for stock units.
pub struct StockRepo;

impl StockRepo {
    /// Insert every entry of a batch for one item in a single transaction.
    ///
    /// Returns the created rows joined with item fields, newest first. If
    /// any insert fails nothing is written.
    pub async fn create_batch(
        pool: &PgPool,
        input: &CreateStockBatch,
    ) -> Result<Vec<StockUnitDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut ids = Vec::with_capacity(input.entries.len());
        for entry in &input.entries {
            let (id,): (DbId,) = sqlx::query_as(
                "INSERT INTO stock (item_id, serial_number, asset_id, location)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id",
            )
            .bind(input.item_id)
            .bind(&entry.serial_number)
            .bind(&entry.asset_id)
            .bind(&entry.location)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }

        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM stock s JOIN items i ON i.id = s.item_id
             WHERE s.id = ANY($1)
             ORDER BY s.created_at DESC, s.id DESC"
        );
        let created = sqlx::query_as::<_, StockUnitDetail>(&query)
            .bind(&ids)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Find a unit by ID, joined with its item.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StockUnitDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM stock s JOIN items i ON i.id = s.item_id WHERE s.id = $1"
        );
        sqlx::query_as::<_, StockUnitDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every unit joined with its item, most recently added first.
    pub async fn list(pool: &PgPool) -> Result<Vec<StockUnitDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM stock s JOIN items i ON i.id = s.item_id
             ORDER BY s.created_at DESC, s.id DESC"
        );
        sqlx::query_as::<_, StockUnitDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List every raw stock row. Feeds the inventory and stats aggregators.
    pub async fn list_units(pool: &PgPool) -> Result<Vec<StockUnit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stock ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, StockUnit>(&query).fetch_all(pool).await
    }

    /// Replace all mutable fields of a unit.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStockUnit,
    ) -> Result<Option<StockUnitDetail>, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                UPDATE stock SET
                    serial_number = $2,
                    asset_id = $3,
                    location = $4,
                    staff_id = $5,
                    deployment_location = $6,
                    deployment_date = $7
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {DETAIL_COLUMNS} FROM s JOIN items i ON i.id = s.item_id"
        );
        sqlx::query_as::<_, StockUnitDetail>(&query)
            .bind(id)
            .bind(&input.serial_number)
            .bind(&input.asset_id)
            .bind(&input.location)
            .bind(&input.staff_id)
            .bind(&input.deployment_location)
            .bind(input.deployment_date)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a unit. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stock WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of units currently referencing an item.
    pub async fn count_for_item(pool: &PgPool, item_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stock WHERE item_id = $1")
            .bind(item_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
