// shopcart/src/store/mod.rs

//! Store primitives for shopcart rows and the two backends implementing them.

pub mod filter;
pub mod memory;
pub mod postgres;

use crate::error::StoreResult;
use crate::model::{ItemKey, ShopcartItem};
use async_trait::async_trait;
use filter::ItemFilter;

/// A table of shopcart rows keyed by `(customer_id, product_id)`.
///
/// Each call is its own unit of work; nothing is composed across calls.
/// Rows come back ordered by their `ItemKey`.
#[async_trait]
pub trait ShopcartStore: Send + Sync {
  /// Creates the backing table if it does not exist yet.
  async fn init_schema(&self) -> StoreResult<()>;

  /// Round-trips to the backend. Fails with `StoreError::Connection` when it is unreachable.
  async fn ping(&self) -> StoreResult<()>;

  /// Inserts a new row. Fails with `StoreError::Duplicate` if the key is taken.
  async fn insert(&self, item: &ShopcartItem) -> StoreResult<()>;

  /// Overwrites name, price and quantity of an existing row.
  /// Fails with `StoreError::NotFound` if the key is absent.
  async fn update(&self, item: &ShopcartItem) -> StoreResult<()>;

  /// Removes one row. Returns whether a row was actually removed.
  async fn delete(&self, key: ItemKey) -> StoreResult<bool>;

  /// Removes every row matching `filter` and returns them, in one statement.
  async fn delete_matching(&self, filter: &ItemFilter) -> StoreResult<Vec<ShopcartItem>>;

  /// Returns rows matching `filter`, at most `limit` of them when given.
  async fn select(&self, filter: &ItemFilter, limit: Option<usize>) -> StoreResult<Vec<ShopcartItem>>;
}
