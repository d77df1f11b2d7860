//! Repository for the `product` table.

use crate::error::AppResult;
use futures::TryStreamExt;
use sqlx::FromRow;

use super::DbPool;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: i32,
}

/// A row to insert; `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductRow {
    pub name: String,
    pub price: i32,
}

impl NewProductRow {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

pub async fn ensure_product_table(pool: &DbPool) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Stream every row ordered by id, calling `f` for each. Returns the row count.
pub async fn products_for_each<F>(pool: &DbPool, mut f: F) -> AppResult<usize>
where
    F: FnMut(&ProductRow),
{
    let mut rows =
        sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM product ORDER BY id")
            .fetch(pool);
    let mut count = 0;
    while let Some(row) = rows.try_next().await? {
        f(&row);
        count += 1;
    }
    Ok(count)
}

pub async fn product_get_by_id(pool: &DbPool, id: i32) -> AppResult<Option<ProductRow>> {
    let row = sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM product WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert all items in one transaction, reusing one prepared statement.
/// Any failure rolls the whole batch back.
pub async fn products_insert_batch(
    pool: &DbPool,
    items: &[NewProductRow],
) -> AppResult<Vec<i32>> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        // Same SQL text each iteration: sqlx prepares it once per connection and caches it.
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO product (name, price) VALUES ($1, $2) RETURNING id")
                .bind(&item.name)
                .bind(item.price)
                .fetch_one(&mut *tx)
                .await?;
        ids.push(id);
    }
    tx.commit().await?;
    Ok(ids)
}
