// shopcart_service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use shopcart::{InMemoryShopcartStore, PgShopcartStore, ShopcartStore, Shopcarts};
use shopcart_service::config::{AppConfig, StoreBackend};
use shopcart_service::state::AppState;
use shopcart_service::{telemetry, web};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Config comes first: it decides the log format.
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  telemetry::init_tracing(app_config.log_format);

  tracing::info!("Starting shopcart service...");

  let store: Arc<dyn ShopcartStore> = match app_config.store_backend {
    StoreBackend::Postgres => {
      let store = PgShopcartStore::connect(&app_config.database_uri, app_config.db_max_connections)
        .await
        .context("Failed to connect to the database")?;
      tracing::info!("Successfully connected to the database.");
      Arc::new(store)
    }
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory store; data will not survive a restart.");
      Arc::new(InMemoryShopcartStore::new())
    }
  };

  let shopcarts = Shopcarts::new(store);
  if app_config.auto_migrate {
    shopcarts.init_db().await.context("Failed to initialize the shopcarts table")?;
  }

  let app_state = AppState::new(shopcarts, app_config.clone());

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await?;

  Ok(())
}
