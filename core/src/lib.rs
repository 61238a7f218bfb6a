// src/lib.rs

//! Shopcart: the persistence layer behind the shopcart REST service.
//!
//! A shopcart is a set of rows keyed by the composite `(customer_id, product_id)`
//! pair. This crate provides:
//!  - `ShopcartItem`, its JSON serialization, and a typed decoder that reports
//!    *why* a payload was rejected (`DecodeError`).
//!  - The `ShopcartStore` trait: insert, update, delete, and query-by-filter primitives.
//!  - Two stores: `PgShopcartStore` (PostgreSQL via sqlx) and `InMemoryShopcartStore`.
//!  - `Shopcarts`, the repository the HTTP layer talks to (find by customer,
//!    by price threshold, by exact item; create/update/delete; checkout).

pub mod error;
pub mod model;
pub mod repository;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{DecodeError, StoreError, StoreResult};
pub use crate::model::{ItemKey, ShopcartItem};
pub use crate::repository::{ItemQuery, Shopcarts};
pub use crate::store::filter::ItemFilter;
pub use crate::store::memory::InMemoryShopcartStore;
pub use crate::store::postgres::PgShopcartStore;
pub use crate::store::ShopcartStore;

/*
    Typical wiring:
    1. Build a store: `PgShopcartStore::connect(uri, max_connections)` or `InMemoryShopcartStore::new()`.
    2. Wrap it: `Shopcarts::new(Arc::new(store))`. Clone the repository freely; clones share the store.
    3. Call `init_db()` once at startup to create the table when it is missing.
    4. Decode request bodies with `ShopcartItem::deserialize(&json)` and hand the item to `create`/`update`.
*/
