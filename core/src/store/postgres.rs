// shopcart/src/store/postgres.rs

//! `ShopcartStore` over a PostgreSQL table via sqlx.

use super::filter::ItemFilter;
use super::ShopcartStore;
use crate::error::{StoreError, StoreResult};
use crate::model::{ItemKey, ShopcartItem};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};
use tracing::{event, instrument, Level};

const COLUMNS: &str = "customer_id, product_id, product_name, product_price, quantity";

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS shopcarts (
  customer_id   BIGINT           NOT NULL,
  product_id    BIGINT           NOT NULL,
  product_name  VARCHAR(63)      NOT NULL,
  product_price DOUBLE PRECISION NOT NULL,
  quantity      INTEGER          NOT NULL,
  PRIMARY KEY (customer_id, product_id)
)
"#;

#[derive(Debug, Clone)]
pub struct PgShopcartStore {
  pool: PgPool,
}

impl PgShopcartStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Opens a pool against `database_uri`.
  pub async fn connect(database_uri: &str, max_connections: u32) -> StoreResult<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_uri)
      .await?;
    event!(Level::INFO, max_connections, "Connected to PostgreSQL.");
    Ok(Self::new(pool))
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

/// Appends `WHERE ...` for every predicate the filter sets.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ItemFilter) {
  let mut separator = " WHERE ";
  if let Some(customer_id) = filter.customer_id {
    builder.push(separator).push("customer_id = ").push_bind(customer_id);
    separator = " AND ";
  }
  if let Some(product_id) = filter.product_id {
    builder.push(separator).push("product_id = ").push_bind(product_id);
    separator = " AND ";
  }
  if let Some(min_price) = filter.min_price {
    builder.push(separator).push("product_price >= ").push_bind(min_price);
  }
}

#[async_trait]
impl ShopcartStore for PgShopcartStore {
  #[instrument(name = "PgShopcartStore::init_schema", skip_all, err(Display))]
  async fn init_schema(&self) -> StoreResult<()> {
    sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
    event!(Level::INFO, "Table 'shopcarts' is ready.");
    Ok(())
  }

  async fn ping(&self) -> StoreResult<()> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }

  #[instrument(name = "PgShopcartStore::insert", skip_all, fields(key = %item.key()), err(Display))]
  async fn insert(&self, item: &ShopcartItem) -> StoreResult<()> {
    sqlx::query(
      "INSERT INTO shopcarts (customer_id, product_id, product_name, product_price, quantity) \
       VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(item.customer_id)
    .bind(item.product_id)
    .bind(&item.product_name)
    .bind(item.product_price)
    .bind(item.quantity)
    .execute(&self.pool)
    .await
    .map_err(|e| StoreError::on_insert(e, item.key()))?;
    Ok(())
  }

  #[instrument(name = "PgShopcartStore::update", skip_all, fields(key = %item.key()), err(Display))]
  async fn update(&self, item: &ShopcartItem) -> StoreResult<()> {
    let result = sqlx::query(
      "UPDATE shopcarts SET product_name = $3, product_price = $4, quantity = $5 \
       WHERE customer_id = $1 AND product_id = $2",
    )
    .bind(item.customer_id)
    .bind(item.product_id)
    .bind(&item.product_name)
    .bind(item.product_price)
    .bind(item.quantity)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(StoreError::NotFound { key: item.key() });
    }
    Ok(())
  }

  #[instrument(name = "PgShopcartStore::delete", skip(self), err(Display))]
  async fn delete(&self, key: ItemKey) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM shopcarts WHERE customer_id = $1 AND product_id = $2")
      .bind(key.customer_id)
      .bind(key.product_id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  #[instrument(name = "PgShopcartStore::delete_matching", skip(self), err(Display))]
  async fn delete_matching(&self, filter: &ItemFilter) -> StoreResult<Vec<ShopcartItem>> {
    let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM shopcarts");
    push_filter(&mut builder, filter);
    builder.push(" RETURNING ").push(COLUMNS);

    let mut removed = builder.build_query_as::<ShopcartItem>().fetch_all(&self.pool).await?;
    // RETURNING has no ORDER BY.
    removed.sort_by_key(ShopcartItem::key);
    event!(Level::DEBUG, count = removed.len(), "Rows deleted.");
    Ok(removed)
  }

  #[instrument(name = "PgShopcartStore::select", skip(self), err(Display))]
  async fn select(&self, filter: &ItemFilter, limit: Option<usize>) -> StoreResult<Vec<ShopcartItem>> {
    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM shopcarts"));
    push_filter(&mut builder, filter);
    builder.push(" ORDER BY customer_id, product_id");
    if let Some(limit) = limit {
      builder.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }

    let rows = builder.build_query_as::<ShopcartItem>().fetch_all(&self.pool).await?;
    Ok(rows)
  }
}
