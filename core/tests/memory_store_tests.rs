// tests/memory_store_tests.rs
mod common;

use common::*;
use shopcart::{InMemoryShopcartStore, ItemFilter, ItemKey, ShopcartStore, StoreError};

#[tokio::test]
async fn test_select_orders_by_composite_key() {
  setup_tracing();
  let store = InMemoryShopcartStore::with_items(vec![
    item(2000, 1, 5.0),
    item(1000, 9, 5.0),
    item(1000, 3, 5.0),
  ]);

  let rows = store.select(&ItemFilter::all(), None).await.unwrap();
  assert_eq!(keys(&rows), vec![(1000, 3), (1000, 9), (2000, 1)]);
}

#[tokio::test]
async fn test_select_honours_limit() {
  setup_tracing();
  let store = InMemoryShopcartStore::with_items(priced_items());

  let rows = store.select(&ItemFilter::all(), Some(3)).await.unwrap();
  assert_eq!(rows.len(), 3);
  let none = store.select(&ItemFilter::all(), Some(0)).await.unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn test_select_by_product_without_customer_scans_everything() {
  setup_tracing();
  let store = InMemoryShopcartStore::with_items(vec![item(1, 7, 1.0), item(2, 7, 1.0), item(3, 8, 1.0)]);

  let filter = ItemFilter {
    product_id: Some(7),
    ..ItemFilter::default()
  };
  let rows = store.select(&filter, None).await.unwrap();
  assert_eq!(keys(&rows), vec![(1, 7), (2, 7)]);
}

#[tokio::test]
async fn test_update_replaces_row_and_rejects_unknown_key() {
  setup_tracing();
  let store = InMemoryShopcartStore::with_items(vec![item(1, 1, 1.0)]);

  let mut changed = item(1, 1, 2.5);
  changed.quantity = 10;
  store.update(&changed).await.unwrap();
  let rows = store.select(&ItemFilter::item(ItemKey::new(1, 1)), None).await.unwrap();
  assert_eq!(rows, vec![changed]);

  match store.update(&item(1, 2, 1.0)).await {
    Err(StoreError::NotFound { key }) => assert_eq!(key, ItemKey::new(1, 2)),
    other => panic!("Expected StoreError::NotFound, got {:?}", other),
  }
}

#[tokio::test]
async fn test_delete_matching_respects_price_bound() {
  setup_tracing();
  let store = InMemoryShopcartStore::with_items(priced_items());

  let removed = store
    .delete_matching(&ItemFilter::customer(1000).with_min_price(100.0))
    .await
    .unwrap();
  assert_eq!(keys(&removed), vec![(1000, 2002)]);
  assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_ping_and_schema_are_noops() {
  setup_tracing();
  let store = InMemoryShopcartStore::new();
  store.init_schema().await.unwrap();
  store.ping().await.unwrap();
  assert!(store.is_empty());
}
