// shopcart_service/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{index_handlers, product_handlers, shopcart_handlers};

// This function will be called in `main.rs` (and by the HTTP tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  // Bad path ids and query values get the same JSON error shape as everything else.
  cfg
    .app_data(
      web::PathConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
      web::QueryConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .service(web::resource("/").route(web::get().to(index_handlers::index_handler)))
    .service(web::resource("/health").route(web::get().to(index_handlers::health_handler)))
    // The browser UI talks to the `/api` prefix; scripts and tests use the bare paths.
    .service(web::scope("/api").configure(configure_shopcart_routes))
    .configure(configure_shopcart_routes);
}

fn configure_shopcart_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(web::resource("/shopcarts").route(web::get().to(shopcart_handlers::list_shopcarts_handler)))
    .service(
      web::resource("/shopcarts/{customer_id}")
        .route(web::get().to(shopcart_handlers::get_shopcart_handler))
        .route(web::delete().to(shopcart_handlers::delete_shopcart_handler)),
    )
    .service(
      web::resource(["/shopcarts/{customer_id}/products", "/shopcarts/{customer_id}/products/"])
        .route(web::post().to(product_handlers::add_product_handler)),
    )
    .service(
      web::resource("/shopcarts/{customer_id}/products/{product_id}")
        .route(web::get().to(product_handlers::get_product_handler))
        .route(web::put().to(product_handlers::update_product_handler))
        .route(web::delete().to(product_handlers::delete_product_handler)),
    )
    .service(
      web::resource("/shopcarts/{customer_id}/checkout").route(web::put().to(shopcart_handlers::checkout_handler)),
    );
}
