//! Storage crate: order persistence and the store abstraction used by the bot.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Order, NewOrder, OrderStatus
//! - [`repository`] – OrderStore trait
//! - [`order_repo`] – OrderRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod order_repo;
mod repository;
mod sqlite_pool;


pub use error::StorageError;
pub use models::{NewOrder, Order, OrderStatus};
pub use order_repo::OrderRepository;
pub use repository::OrderStore;
pub use sqlite_pool::SqlitePoolManager;
