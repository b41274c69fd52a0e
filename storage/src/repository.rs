//! Store trait for order persistence. [`crate::OrderRepository`] is the SQLite implementation.

use async_trait::async_trait;

use super::error::StorageError;
use super::models::{NewOrder, Order, OrderStatus};

/// Async order store: single-row operations only.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists the draft as pending and returns the assigned id.
    async fn insert_order(&self, draft: &NewOrder) -> Result<i64, StorageError>;
    /// Returns the order with the given id, or None.
    async fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError>;
    /// Returns every order whose status is pending, oldest first.
    async fn get_pending_orders(&self) -> Result<Vec<Order>, StorageError>;
    /// Overwrites the status without checking the current one. Returns false if no row has that id.
    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<bool, StorageError>;
    /// Sets the status only if the order is still pending. Returns true when this call made the change.
    async fn transition_from_pending(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<bool, StorageError>;
    /// Links the announcement message. Returns false if the order is unknown or already linked.
    async fn attach_message_id(&self, id: i64, message_id: &str) -> Result<bool, StorageError>;
}
