// shopcart/examples/basic_repository.rs

use serde_json::json;
use shopcart::{InMemoryShopcartStore, ShopcartItem, Shopcarts, StoreError};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StoreError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Repository Example ---");

  // 1. Build a store and wrap it in the repository.
  let shopcarts = Shopcarts::new(Arc::new(InMemoryShopcartStore::new()));
  shopcarts.init_db().await?;

  // 2. Decode request-shaped payloads and create rows.
  for payload in [
    json!({ "customer_id": 1000, "product_id": 1001, "product_name": "a", "product_price": 10.1, "quantity": 1 }),
    json!({ "customer_id": 1000, "product_id": 2002, "product_name": "b", "product_price": 102.1, "quantity": 2 }),
    json!({ "customer_id": 2000, "product_id": 3003, "product_name": "c", "product_price": 106, "quantity": 1 }),
    json!({ "customer_id": 2000, "product_id": 4747, "product_name": "d", "product_price": 10, "quantity": 5 }),
  ] {
    let item = ShopcartItem::deserialize(&payload)?;
    shopcarts.create(&item).await?;
  }

  // 3. A rejected payload never reaches the store.
  if let Err(e) = ShopcartItem::deserialize(&json!("this is not a dictionary")) {
    info!("Rejected payload: {}", e);
  }

  // 4. Queries.
  let expensive = shopcarts.find_items_by_price(100.0).await?;
  info!("Items priced >= 100: {}", expensive.len());

  let customer_cart = shopcarts.find_by_customer_id(1000).all().await?;
  info!("Customer 1000 has {} items", customer_cart.len());

  // 5. Checkout clears the cart and hands back what was in it.
  let checked_out = shopcarts.delete_customer(1000).await?;
  for item in &checked_out {
    info!("Checked out: {}", item.serialize());
  }
  info!("Rows left: {}", shopcarts.find_all().await?.len());

  Ok(())
}
