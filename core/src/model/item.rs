// shopcart/src/model/item.rs

use crate::error::DecodeError;
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::FromRow;
use std::fmt;

/// Composite identity of a shopcart row.
///
/// Ordering is `(customer_id, product_id)`, which is also the order stores return rows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
  pub customer_id: i64,
  pub product_id: i64,
}

impl ItemKey {
  pub fn new(customer_id: i64, product_id: i64) -> Self {
    Self {
      customer_id,
      product_id,
    }
  }
}

impl fmt::Display for ItemKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(customer {}, product {})", self.customer_id, self.product_id)
  }
}

/// One product and its quantity within one customer's cart.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ShopcartItem {
  pub customer_id: i64,
  pub product_id: i64,
  pub product_name: String,
  pub product_price: f64,
  pub quantity: i32,
}

impl ShopcartItem {
  pub fn new(
    customer_id: i64,
    product_id: i64,
    product_name: impl Into<String>,
    product_price: f64,
    quantity: i32,
  ) -> Self {
    Self {
      customer_id,
      product_id,
      product_name: product_name.into(),
      product_price,
      quantity,
    }
  }

  pub fn key(&self) -> ItemKey {
    ItemKey::new(self.customer_id, self.product_id)
  }

  /// The five-key JSON object used in request and response bodies.
  pub fn serialize(&self) -> Value {
    json!({
      "customer_id": self.customer_id,
      "product_id": self.product_id,
      "product_name": self.product_name,
      "product_price": self.product_price,
      "quantity": self.quantity,
    })
  }

  /// Decodes a request payload. Every field is required.
  pub fn deserialize(data: &Value) -> Result<Self, DecodeError> {
    super::decode::decode_item(data)
  }

  /// Applies a full PUT payload to an already-stored item.
  ///
  /// The payload is validated as a complete item, but the composite key of `self`
  /// is kept: only name, price and quantity change.
  pub fn apply_update(&mut self, data: &Value) -> Result<(), DecodeError> {
    let incoming = Self::deserialize(data)?;
    self.product_name = incoming.product_name;
    self.product_price = incoming.product_price;
    self.quantity = incoming.quantity;
    Ok(())
  }
}
