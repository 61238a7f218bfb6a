// shopcart_service/src/lib.rs

//! HTTP surface of the shopcart service: configuration, shared state, error
//! mapping and the actix-web routes over the `shopcart` repository.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, ErrorBody};
pub use crate::state::AppState;
