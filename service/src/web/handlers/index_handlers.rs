// shopcart_service/src/web/handlers/index_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Shopcart REST API Service";
pub const SERVICE_VERSION: &str = "1.0";

#[instrument(name = "handler::index")]
pub async fn index_handler() -> HttpResponse {
  info!("Request for Root URL");
  HttpResponse::Ok().json(json!({ "name": SERVICE_NAME, "version": SERVICE_VERSION }))
}

/// Liveness plus a store round trip. Any store failure here means the
/// service cannot do its job, so it is reported as 503.
#[instrument(name = "handler::health", skip(app_state))]
pub async fn health_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state
    .shopcarts
    .ping()
    .await
    .map_err(|source| AppError::StoreUnavailable { source })?;
  Ok(HttpResponse::Ok().json(json!({ "status": "OK" })))
}
