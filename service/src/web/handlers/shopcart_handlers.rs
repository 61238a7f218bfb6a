// shopcart_service/src/web/handlers/shopcart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct PriceQuery {
  /// Inclusive lower bound on `product_price`.
  pub price: Option<f64>,
}

#[instrument(name = "handler::list_shopcarts", skip(app_state, query), fields(price = ?query.price))]
pub async fn list_shopcarts_handler(
  app_state: web::Data<AppState>,
  query: web::Query<PriceQuery>,
) -> Result<HttpResponse, AppError> {
  let items = match query.price {
    Some(price) => {
      info!("Request for all shopcart items with price >= {}", price);
      app_state.shopcarts.find_items_by_price(price).await?
    }
    None => {
      info!("Request for all shopcart items");
      app_state.shopcarts.find_all().await?
    }
  };

  info!("Returning {} shopcart items.", items.len());
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::get_shopcart", skip(app_state, path, query), fields(customer_id = %path.as_ref(), price = ?query.price))]
pub async fn get_shopcart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  query: web::Query<PriceQuery>,
) -> Result<HttpResponse, AppError> {
  let customer_id = path.into_inner();

  let items = match query.price {
    Some(price) => {
      app_state
        .shopcarts
        .find_items_by_price_for_customer(customer_id, price)
        .await?
    }
    None => app_state.shopcarts.find_by_customer_id(customer_id).all().await?,
  };

  if items.is_empty() {
    warn!("No shopcart items found for customer {}.", customer_id);
    return Err(AppError::NotFound(format!(
      "Shopcart for customer with id '{}' was not found.",
      customer_id
    )));
  }

  info!("Returning {} items for customer {}.", items.len(), customer_id);
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::delete_shopcart", skip(app_state, path), fields(customer_id = %path.as_ref()))]
pub async fn delete_shopcart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let customer_id = path.into_inner();
  let removed = app_state.shopcarts.delete_customer(customer_id).await?;
  info!("Shopcart for customer {} deleted ({} items).", customer_id, removed.len());
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::checkout", skip(app_state, path), fields(customer_id = %path.as_ref()))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let customer_id = path.into_inner();

  // Removal and listing happen in one store call, so the response is exactly what was checked out.
  let purchased = app_state.shopcarts.delete_customer(customer_id).await?;
  if purchased.is_empty() {
    warn!("Checkout requested for customer {} with no shopcart.", customer_id);
    return Err(AppError::NotFound(format!(
      "Shopcart for customer with id '{}' was not found.",
      customer_id
    )));
  }

  info!("Customer {} checked out {} items.", customer_id, purchased.len());
  Ok(HttpResponse::Ok().json(purchased))
}
