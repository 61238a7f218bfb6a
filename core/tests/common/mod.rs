// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use shopcart::{InMemoryShopcartStore, ShopcartItem, Shopcarts};
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---

/// Mirrors the fixture spread used across the suites: a handful of customers,
/// products and prices.
pub fn item(customer_id: i64, product_id: i64, product_price: f64) -> ShopcartItem {
  ShopcartItem::new(customer_id, product_id, format!("product-{}", product_id), product_price, 1)
}

/// Four items over two customers with prices [10.1, 102.1, 106, 10].
pub fn priced_items() -> Vec<ShopcartItem> {
  vec![
    item(1000, 1001, 10.1),
    item(1000, 2002, 102.1),
    item(2000, 3003, 106.0),
    item(2000, 4747, 10.0),
  ]
}

/// A repository over a fresh in-memory store. The store handle is returned too
/// so tests can look at raw row counts.
pub fn memory_repository() -> (Shopcarts, Arc<InMemoryShopcartStore>) {
  let store = Arc::new(InMemoryShopcartStore::new());
  (Shopcarts::new(store.clone()), store)
}

pub async fn seeded_repository(items: &[ShopcartItem]) -> (Shopcarts, Arc<InMemoryShopcartStore>) {
  let (shopcarts, store) = memory_repository();
  for it in items {
    shopcarts.create(it).await.expect("seeding should not collide");
  }
  (shopcarts, store)
}

pub fn keys(items: &[ShopcartItem]) -> Vec<(i64, i64)> {
  items.iter().map(|i| (i.customer_id, i.product_id)).collect()
}
