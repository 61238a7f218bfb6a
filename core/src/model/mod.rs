// shopcart/src/model/mod.rs

//! The shopcart item entity and its JSON decoding.

pub mod decode;
pub mod item;

pub use item::{ItemKey, ShopcartItem};
