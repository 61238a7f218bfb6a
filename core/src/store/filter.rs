// shopcart/src/store/filter.rs

use crate::model::{ItemKey, ShopcartItem};

/// Conjunction of optional predicates over shopcart rows. The default matches every row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemFilter {
  pub customer_id: Option<i64>,
  pub product_id: Option<i64>,
  /// Inclusive lower bound on `product_price`.
  pub min_price: Option<f64>,
}

impl ItemFilter {
  pub fn all() -> Self {
    Self::default()
  }

  pub fn customer(customer_id: i64) -> Self {
    Self {
      customer_id: Some(customer_id),
      ..Self::default()
    }
  }

  pub fn item(key: ItemKey) -> Self {
    Self {
      customer_id: Some(key.customer_id),
      product_id: Some(key.product_id),
      min_price: None,
    }
  }

  pub fn with_min_price(mut self, price: f64) -> Self {
    self.min_price = Some(price);
    self
  }

  pub fn matches(&self, item: &ShopcartItem) -> bool {
    self.customer_id.map_or(true, |c| item.customer_id == c)
      && self.product_id.map_or(true, |p| item.product_id == p)
      && self.min_price.map_or(true, |min| item.product_price >= min)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_filter_matches_everything() {
    let item = ShopcartItem::new(1, 2, "a", 0.0, 0);
    assert!(ItemFilter::all().matches(&item));
  }

  #[test]
  fn price_bound_is_inclusive() {
    let filter = ItemFilter::all().with_min_price(100.0);
    assert!(filter.matches(&ShopcartItem::new(1, 1, "a", 100.0, 1)));
    assert!(filter.matches(&ShopcartItem::new(1, 2, "b", 102.1, 1)));
    assert!(!filter.matches(&ShopcartItem::new(1, 3, "c", 99.99, 1)));
  }

  #[test]
  fn predicates_combine_with_and() {
    let filter = ItemFilter::customer(7).with_min_price(10.0);
    assert!(filter.matches(&ShopcartItem::new(7, 1, "a", 10.1, 1)));
    assert!(!filter.matches(&ShopcartItem::new(8, 1, "a", 10.1, 1)));
    assert!(!filter.matches(&ShopcartItem::new(7, 1, "a", 9.0, 1)));

    let exact = ItemFilter::item(ItemKey::new(7, 1));
    assert!(exact.matches(&ShopcartItem::new(7, 1, "a", 1.0, 1)));
    assert!(!exact.matches(&ShopcartItem::new(7, 2, "a", 1.0, 1)));
  }
}
