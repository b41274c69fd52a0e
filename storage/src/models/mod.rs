//! Data models for storage (orders and their lifecycle status).
//!
//! Used by OrderRepository and callers of the storage API.

mod order_record;

pub use order_record::{NewOrder, Order, OrderStatus};
