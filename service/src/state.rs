// shopcart_service/src/state.rs
use crate::config::AppConfig;
use shopcart::Shopcarts;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub shopcarts: Shopcarts,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(shopcarts: Shopcarts, config: Arc<AppConfig>) -> Self {
    Self { shopcarts, config }
  }
}
