// shopcart/src/repository.rs

//! Defines `Shopcarts`, the repository the request handlers use.
//!
//! It wraps a shared `ShopcartStore` and exposes the shopcart operations:
//! create/update/delete of single items, the filtered finders, and clearing a
//! whole cart (checkout).

use crate::error::{StoreError, StoreResult};
use crate::model::{ItemKey, ShopcartItem};
use crate::store::filter::ItemFilter;
use crate::store::ShopcartStore;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Handle to the shopcart table. Cheap to clone; clones share the store.
#[derive(Clone)]
pub struct Shopcarts {
  store: Arc<dyn ShopcartStore>,
}

impl Shopcarts {
  pub fn new(store: Arc<dyn ShopcartStore>) -> Self {
    Self { store }
  }

  /// Creates the table if needed. Called once at startup.
  pub async fn init_db(&self) -> StoreResult<()> {
    event!(Level::INFO, "Initializing database");
    self.store.init_schema().await
  }

  pub async fn ping(&self) -> StoreResult<()> {
    self.store.ping().await
  }

  /// Inserts a new item.
  ///
  /// Callers are expected to check for an existing `(customer_id, product_id)`
  /// first; if another request wins the race the store still rejects the
  /// second insert with `StoreError::Duplicate`.
  #[instrument(name = "Shopcarts::create", skip_all, fields(key = %item.key()), err(Display))]
  pub async fn create(&self, item: &ShopcartItem) -> StoreResult<()> {
    event!(Level::INFO, "Creating shopcart item");
    self.store.insert(item).await
  }

  /// Saves changes to an item that was loaded from the store.
  #[instrument(name = "Shopcarts::update", skip_all, fields(key = %item.key()), err(Display))]
  pub async fn update(&self, item: &ShopcartItem) -> StoreResult<()> {
    event!(Level::INFO, "Saving shopcart item");
    if item.customer_id == 0 {
      return Err(StoreError::Validation("Update called with empty ID field".to_string()));
    }
    self.store.update(item).await
  }

  /// Removes an item. Returns `false` if it was already gone.
  #[instrument(name = "Shopcarts::delete", skip_all, fields(key = %item.key()), err(Display))]
  pub async fn delete(&self, item: &ShopcartItem) -> StoreResult<bool> {
    event!(Level::INFO, "Deleting shopcart item");
    self.store.delete(item.key()).await
  }

  pub async fn find_all(&self) -> StoreResult<Vec<ShopcartItem>> {
    event!(Level::INFO, "Processing all shopcart items");
    self.query(ItemFilter::all()).all().await
  }

  /// Lazy query over one customer's items. Run it with `.all()` or `.first()`.
  pub fn find_by_customer_id(&self, customer_id: i64) -> ItemQuery<'_> {
    event!(Level::INFO, customer_id, "Processing customer query");
    self.query(ItemFilter::customer(customer_id))
  }

  pub async fn find_by_shopcart_item(&self, customer_id: i64, product_id: i64) -> StoreResult<Option<ShopcartItem>> {
    event!(Level::INFO, customer_id, product_id, "Processing item lookup");
    self.query(ItemFilter::item(ItemKey::new(customer_id, product_id))).first().await
  }

  /// Items of one customer priced at or above `price`.
  pub async fn find_items_by_price_for_customer(&self, customer_id: i64, price: f64) -> StoreResult<Vec<ShopcartItem>> {
    event!(Level::INFO, customer_id, price, "Processing price query for customer");
    self.find_by_customer_id(customer_id).min_price(price).all().await
  }

  /// Items of every customer priced at or above `price`.
  pub async fn find_items_by_price(&self, price: f64) -> StoreResult<Vec<ShopcartItem>> {
    event!(Level::INFO, price, "Processing price query");
    self.query(ItemFilter::all().with_min_price(price)).all().await
  }

  /// Removes a customer's whole cart and returns what was in it.
  #[instrument(name = "Shopcarts::delete_customer", skip(self), err(Display))]
  pub async fn delete_customer(&self, customer_id: i64) -> StoreResult<Vec<ShopcartItem>> {
    let removed = self.store.delete_matching(&ItemFilter::customer(customer_id)).await?;
    event!(Level::INFO, count = removed.len(), "Shopcart cleared");
    Ok(removed)
  }

  fn query(&self, filter: ItemFilter) -> ItemQuery<'_> {
    ItemQuery {
      store: self.store.as_ref(),
      filter,
    }
  }
}

/// A filter bound to a store, not yet executed.
pub struct ItemQuery<'a> {
  store: &'a dyn ShopcartStore,
  filter: ItemFilter,
}

impl<'a> ItemQuery<'a> {
  pub fn filter(&self) -> &ItemFilter {
    &self.filter
  }

  /// Narrows the query to items priced at or above `price`.
  pub fn min_price(mut self, price: f64) -> Self {
    self.filter = self.filter.with_min_price(price);
    self
  }

  pub async fn all(self) -> StoreResult<Vec<ShopcartItem>> {
    self.store.select(&self.filter, None).await
  }

  pub async fn first(self) -> StoreResult<Option<ShopcartItem>> {
    let mut rows = self.store.select(&self.filter, Some(1)).await?;
    Ok(rows.pop())
  }
}
