// shopcart/src/store/memory.rs

//! A `ShopcartStore` held in process memory.
//!
//! Backs the test suites and the `STORE_BACKEND=memory` mode of the server.
//! Rows live in a `BTreeMap` keyed by `ItemKey`, so iteration order is the
//! store-wide `(customer_id, product_id)` order and per-customer lookups are range scans.
//!
//! IMPORTANT: lock guards are blocking `parking_lot` guards. None of the methods
//! below hold one across an `.await`.

use super::filter::ItemFilter;
use super::ShopcartStore;
use crate::error::{StoreError, StoreResult};
use crate::model::{ItemKey, ShopcartItem};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use tracing::{event, Level};

#[derive(Debug, Default)]
pub struct InMemoryShopcartStore {
  rows: RwLock<BTreeMap<ItemKey, ShopcartItem>>,
}

impl InMemoryShopcartStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a store pre-filled with `items`. Later items win on key collisions.
  pub fn with_items<I>(items: I) -> Self
  where
    I: IntoIterator<Item = ShopcartItem>,
  {
    let rows = items.into_iter().map(|item| (item.key(), item)).collect();
    Self { rows: RwLock::new(rows) }
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }

  /// Key range covering the filter's customer, or every key.
  fn key_range(filter: &ItemFilter) -> RangeInclusive<ItemKey> {
    match (filter.customer_id, filter.product_id) {
      (Some(c), Some(p)) => ItemKey::new(c, p)..=ItemKey::new(c, p),
      (Some(c), None) => ItemKey::new(c, i64::MIN)..=ItemKey::new(c, i64::MAX),
      _ => ItemKey::new(i64::MIN, i64::MIN)..=ItemKey::new(i64::MAX, i64::MAX),
    }
  }
}

#[async_trait]
impl ShopcartStore for InMemoryShopcartStore {
  async fn init_schema(&self) -> StoreResult<()> {
    Ok(())
  }

  async fn ping(&self) -> StoreResult<()> {
    Ok(())
  }

  async fn insert(&self, item: &ShopcartItem) -> StoreResult<()> {
    let key = item.key();
    let mut rows = self.rows.write();
    if rows.contains_key(&key) {
      event!(Level::DEBUG, %key, "Insert rejected, key already present.");
      return Err(StoreError::Duplicate { key });
    }
    rows.insert(key, item.clone());
    Ok(())
  }

  async fn update(&self, item: &ShopcartItem) -> StoreResult<()> {
    let key = item.key();
    match self.rows.write().get_mut(&key) {
      Some(row) => {
        *row = item.clone();
        Ok(())
      }
      None => Err(StoreError::NotFound { key }),
    }
  }

  async fn delete(&self, key: ItemKey) -> StoreResult<bool> {
    Ok(self.rows.write().remove(&key).is_some())
  }

  async fn delete_matching(&self, filter: &ItemFilter) -> StoreResult<Vec<ShopcartItem>> {
    let mut rows = self.rows.write();
    let doomed: Vec<ItemKey> = rows
      .range(Self::key_range(filter))
      .filter(|(_, item)| filter.matches(item))
      .map(|(key, _)| *key)
      .collect();
    Ok(doomed.iter().filter_map(|key| rows.remove(key)).collect())
  }

  async fn select(&self, filter: &ItemFilter, limit: Option<usize>) -> StoreResult<Vec<ShopcartItem>> {
    let rows = self.rows.read();
    let matching = rows
      .range(Self::key_range(filter))
      .map(|(_, item)| item)
      .filter(|item| filter.matches(item))
      .cloned();
    Ok(match limit {
      Some(n) => matching.take(n).collect(),
      None => matching.collect(),
    })
  }
}
