// shopcart_service/src/web/handlers/mod.rs

pub mod index_handlers;
pub mod product_handlers;
pub mod shopcart_handlers;
