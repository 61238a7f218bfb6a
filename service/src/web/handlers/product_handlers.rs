// shopcart_service/src/web/handlers/product_handlers.rs

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::JsonContentType;
use shopcart::ShopcartItem;

fn parse_json_body(body: &[u8]) -> Result<Value, AppError> {
  serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))
}

fn item_not_found(customer_id: i64, product_id: i64) -> AppError {
  AppError::NotFound(format!(
    "Product with id '{}' was not found in the shopcart of customer '{}'.",
    product_id, customer_id
  ))
}

/// `<scheme>://<host><collection path>/<product_id>` for the created item.
fn item_location(req: &HttpRequest, product_id: i64) -> String {
  let conn = req.connection_info();
  format!(
    "{}://{}{}/{}",
    conn.scheme(),
    conn.host(),
    req.path().trim_end_matches('/'),
    product_id
  )
}

#[instrument(name = "handler::add_product", skip(app_state, req, body, _json), fields(customer_id = %path.as_ref()))]
pub async fn add_product_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  path: web::Path<i64>,
  _json: JsonContentType,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let customer_id = path.into_inner();
  info!("Request to add a product to the shopcart of customer {}", customer_id);

  let payload = parse_json_body(&body)?;
  let mut item = ShopcartItem::deserialize(&payload)?;
  // The path decides whose cart this is.
  item.customer_id = customer_id;

  if app_state
    .shopcarts
    .find_by_shopcart_item(item.customer_id, item.product_id)
    .await?
    .is_some()
  {
    warn!("Product {} already in shopcart of customer {}.", item.product_id, customer_id);
    return Err(AppError::Duplicate(format!(
      "Product with id '{}' already exists in the shopcart of customer '{}'.",
      item.product_id, customer_id
    )));
  }

  // A concurrent insert of the same key still loses here with `Duplicate`.
  app_state.shopcarts.create(&item).await?;
  info!("Product {} added to shopcart of customer {}.", item.product_id, customer_id);

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, item_location(&req, item.product_id)))
      .json(item.serialize()),
  )
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(customer_id = %path.0, product_id = %path.1))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
  let (customer_id, product_id) = path.into_inner();

  match app_state.shopcarts.find_by_shopcart_item(customer_id, product_id).await? {
    Some(item) => {
      info!("Returning product {} of customer {}.", product_id, customer_id);
      Ok(HttpResponse::Ok().json(item.serialize()))
    }
    None => {
      warn!("Product {} not in shopcart of customer {}.", product_id, customer_id);
      Err(item_not_found(customer_id, product_id))
    }
  }
}

#[instrument(name = "handler::update_product", skip(app_state, path, body, _json), fields(customer_id = %path.0, product_id = %path.1))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(i64, i64)>,
  _json: JsonContentType,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let (customer_id, product_id) = path.into_inner();
  info!("Request to update product {} of customer {}", product_id, customer_id);

  let mut item = match app_state.shopcarts.find_by_shopcart_item(customer_id, product_id).await? {
    Some(item) => item,
    None => {
      warn!("Update for missing product {} of customer {}.", product_id, customer_id);
      return Err(item_not_found(customer_id, product_id));
    }
  };

  let payload = parse_json_body(&body)?;
  item.apply_update(&payload)?;
  app_state.shopcarts.update(&item).await?;

  info!("Product {} of customer {} updated.", product_id, customer_id);
  Ok(HttpResponse::Ok().json(item.serialize()))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(customer_id = %path.0, product_id = %path.1))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
  let (customer_id, product_id) = path.into_inner();

  if let Some(item) = app_state.shopcarts.find_by_shopcart_item(customer_id, product_id).await? {
    app_state.shopcarts.delete(&item).await?;
    info!("Product {} removed from shopcart of customer {}.", product_id, customer_id);
  }

  Ok(HttpResponse::NoContent().finish())
}
