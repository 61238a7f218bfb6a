// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use once_cell::sync::Lazy;
use shopcart::{
  InMemoryShopcartStore, ItemFilter, ItemKey, ShopcartItem, ShopcartStore, Shopcarts, StoreError, StoreResult,
};
use shopcart_service::config::{AppConfig, LogFormat, StoreBackend};
use shopcart_service::state::AppState;
use std::sync::Arc;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Builds an initialized test service over `$state` with the real route table.
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(shopcart_service::web::configure_app_routes),
    )
    .await
  };
}

pub fn test_config() -> Arc<AppConfig> {
  Arc::new(AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 8080,
    database_uri: String::new(),
    db_max_connections: 1,
    auto_migrate: false,
    store_backend: StoreBackend::Memory,
    log_format: LogFormat::Pretty,
  })
}

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

pub async fn memory_state(items: &[ShopcartItem]) -> (AppState, Arc<InMemoryShopcartStore>) {
  let store = Arc::new(InMemoryShopcartStore::new());
  let shopcarts = Shopcarts::new(store.clone());
  for it in items {
    shopcarts.create(it).await.expect("seeding should not collide");
  }
  (AppState::new(shopcarts, test_config()), store)
}

/// A store whose backend is never reachable.
pub struct DownStore;

fn unreachable_backend<T>() -> StoreResult<T> {
  Err(StoreError::Connection(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl ShopcartStore for DownStore {
  async fn init_schema(&self) -> StoreResult<()> {
    unreachable_backend()
  }

  async fn ping(&self) -> StoreResult<()> {
    unreachable_backend()
  }

  async fn insert(&self, _item: &ShopcartItem) -> StoreResult<()> {
    unreachable_backend()
  }

  async fn update(&self, _item: &ShopcartItem) -> StoreResult<()> {
    unreachable_backend()
  }

  async fn delete(&self, _key: ItemKey) -> StoreResult<bool> {
    unreachable_backend()
  }

  async fn delete_matching(&self, _filter: &ItemFilter) -> StoreResult<Vec<ShopcartItem>> {
    unreachable_backend()
  }

  async fn select(&self, _filter: &ItemFilter, _limit: Option<usize>) -> StoreResult<Vec<ShopcartItem>> {
    unreachable_backend()
  }
}

pub fn down_state() -> AppState {
  AppState::new(Shopcarts::new(Arc::new(DownStore)), test_config())
}
