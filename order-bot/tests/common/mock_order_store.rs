//! In-memory `OrderStore` for tests.
//!
//! Same semantics as the SQLite repository (conditional transition, one-time message attach),
//! with no background I/O so timer tests can run on a paused clock.

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use storage::{NewOrder, Order, OrderStatus, OrderStore, StorageError};

#[derive(Debug, Clone, Default)]
pub struct MockOrderStore {
    orders: Arc<Mutex<BTreeMap<i64, Order>>>,
    next_id: Arc<AtomicUsize>,
    insert_call_count: Arc<AtomicUsize>,
    refuse_attach: Arc<AtomicBool>,
}

impl MockOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a full row as-is (e.g. an already-closed or overdue order).
    pub fn seed(&self, order: Order) {
        let id = order.id;
        self.orders.lock().unwrap().insert(id, order);
        self.next_id.fetch_max(id as usize, Ordering::SeqCst);
    }

    /// Makes every subsequent `attach_message_id` report "not updated".
    pub fn refuse_attach(&self) {
        self.refuse_attach.store(true, Ordering::SeqCst);
    }

    pub fn get(&self, id: i64) -> Option<Order> {
        self.orders.lock().unwrap().get(&id).cloned()
    }

    pub fn status(&self, id: i64) -> Option<OrderStatus> {
        self.get(id).map(|o| o.status)
    }

    pub fn len(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    pub fn get_insert_call_count(&self) -> usize {
        self.insert_call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn insert_order(&self, draft: &NewOrder) -> Result<i64, StorageError> {
        self.insert_call_count.fetch_add(1, Ordering::SeqCst);
        let id = (self.next_id.fetch_add(1, Ordering::SeqCst) + 1) as i64;
        self.orders
            .lock()
            .unwrap()
            .insert(id, draft.clone().into_order(id));
        Ok(id)
    }

    async fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError> {
        Ok(self.get(id))
    }

    async fn get_pending_orders(&self) -> Result<Vec<Order>, StorageError> {
        let mut pending: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.status == OrderStatus::Pending)
            .cloned()
            .collect();
        pending.sort_by_key(|o| (o.expire_at, o.id));
        Ok(pending)
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<bool, StorageError> {
        match self.orders.lock().unwrap().get_mut(&id) {
            Some(order) => {
                order.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn transition_from_pending(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<bool, StorageError> {
        if status == OrderStatus::Pending {
            return Err(StorageError::InvalidStatus(status.to_string()));
        }
        match self.orders.lock().unwrap().get_mut(&id) {
            Some(order) if order.status == OrderStatus::Pending => {
                order.status = status;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn attach_message_id(&self, id: i64, message_id: &str) -> Result<bool, StorageError> {
        if self.refuse_attach.load(Ordering::SeqCst) {
            return Ok(false);
        }
        match self.orders.lock().unwrap().get_mut(&id) {
            Some(order) if order.message_id.is_none() => {
                order.message_id = Some(message_id.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Pending order row with a linked message, for seeding.
pub fn pending_order(id: i64, customer_id: u64, created_at: i64, expire_at: i64) -> Order {
    Order {
        id,
        product: format!("Ticket #{}", id),
        customer_info: format!("<@{}>", customer_id),
        customer_id: Some(customer_id.to_string()),
        price: "100".to_string(),
        note: "No note".to_string(),
        expire_at,
        status: OrderStatus::Pending,
        channel_id: "1447582955307532288".to_string(),
        message_id: Some(format!("9000{}", id)),
        created_at,
    }
}
