//! SQL walkthrough: list the `product` table, read one row, insert a batch.

use tracing::{info, instrument, warn};

use super::{
    driver_names, ensure_product_table, product_get_by_id, products_for_each,
    products_insert_batch, DbPool, NewProductRow, ProductRow,
};
use crate::error::AppResult;

/// Row id looked up by the single-row step.
pub const LOOKUP_ID: i32 = 1;

/// What one run of the demo saw and did.
#[derive(Debug, Clone)]
pub struct SqlDemoReport {
    pub drivers: Vec<String>,
    pub rows_listed: usize,
    pub lookup: Option<ProductRow>,
    pub inserted_ids: Vec<i32>,
}

pub fn demo_batch() -> Vec<NewProductRow> {
    vec![
        NewProductRow::new("Light", 10),
        NewProductRow::new("Mic", 30),
        NewProductRow::new("Router", 90),
    ]
}

#[instrument(skip(pool))]
pub async fn run(pool: &DbPool) -> AppResult<SqlDemoReport> {
    let drivers: Vec<String> = driver_names().iter().map(|d| d.to_string()).collect();
    info!(?drivers, "drivers");

    ensure_product_table(pool).await?;

    let rows_listed = products_for_each(pool, |row| {
        info!(id = row.id, name = %row.name, price = row.price, "row");
    })
    .await?;

    let lookup = product_get_by_id(pool, LOOKUP_ID).await?;
    match &lookup {
        Some(row) => info!(id = row.id, name = %row.name, price = row.price, "single row"),
        None => warn!(id = LOOKUP_ID, "single row not found"),
    }

    let inserted_ids = products_insert_batch(pool, &demo_batch()).await?;
    info!(?inserted_ids, "batch inserted");

    Ok(SqlDemoReport {
        drivers,
        rows_listed,
        lookup,
        inserted_ids,
    })
}
