//! Expiration scheduler: one in-memory one-shot timer per pending order.
//!
//! Timers are not persisted. [`ExpirationScheduler::rearm_pending`] rebuilds them from the
//! store at startup and expires overdue orders on the spot. The status flip uses the store's
//! conditional transition, so a timer that fires after the customer already answered does
//! nothing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use storage::{Order, OrderStatus, OrderStore};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::view::{expired_notice, OrderView};
use crate::core::{BotError, OrderBoard, Result};

/// Current wall-clock time in epoch millis.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Delay until the order's deadline, or None if it has passed.
pub fn delay_until(order: &Order, now_ms: i64) -> Option<Duration> {
    let remaining = order.remaining_ms(now_ms);
    if remaining <= 0 {
        None
    } else {
        Some(Duration::from_millis(remaining as u64))
    }
}

/// Counts from a startup re-arm pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RearmSummary {
    /// Orders whose timer was armed.
    pub armed: usize,
    /// Orders already past their deadline and expired immediately.
    pub expired: usize,
}

/// Owns the expiration timers. Cheap to clone; clones share the timer table.
#[derive(Clone)]
pub struct ExpirationScheduler {
    store: Arc<dyn OrderStore>,
    board: Arc<dyn OrderBoard>,
    timers: Arc<Mutex<HashMap<i64, JoinHandle<()>>>>,
}

impl ExpirationScheduler {
    pub fn new(store: Arc<dyn OrderStore>, board: Arc<dyn OrderBoard>) -> Self {
        Self {
            store,
            board,
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Loads every pending order and arms its timer; overdue orders are expired before returning.
    #[instrument(skip(self))]
    pub async fn rearm_pending(&self) -> Result<RearmSummary> {
        let pending = self.store.get_pending_orders().await?;
        let now = now_ms();
        let mut summary = RearmSummary::default();

        for order in &pending {
            if delay_until(order, now).is_none() {
                info!(order_id = order.id, "Order expired while offline, expiring now");
                if let Err(e) = self.expire(order.id).await {
                    warn!(error = %e, order_id = order.id, "Failed to expire overdue order");
                }
                summary.expired += 1;
            } else {
                self.arm(order);
                summary.armed += 1;
            }
        }

        info!(
            armed = summary.armed,
            expired = summary.expired,
            "Expiration timers rebuilt"
        );
        Ok(summary)
    }

    /// Arms a one-shot timer for the order's deadline, replacing any existing timer for it.
    pub fn arm(&self, order: &Order) {
        let order_id = order.id;
        let delay = delay_until(order, now_ms());
        let scheduler = self.clone();

        // Held across the spawn so the task cannot forget itself before it is registered.
        let mut timers = self.lock_timers();
        let handle = tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            scheduler.forget(order_id);
            if let Err(e) = scheduler.expire(order_id).await {
                warn!(error = %e, order_id, "Expiration failed");
            }
        });
        if let Some(previous) = timers.insert(order_id, handle) {
            previous.abort();
        }
        drop(timers);
        info!(order_id, delay_ms = ?delay.map(|d| d.as_millis()), "Expiration timer armed");
    }

    /// Cancels the order's timer, if any. Used once the customer has answered.
    pub fn cancel(&self, order_id: i64) {
        if let Some(handle) = self.lock_timers().remove(&order_id) {
            handle.abort();
        }
    }

    /// Number of timers not yet fired or cancelled.
    pub fn armed_count(&self) -> usize {
        self.lock_timers().len()
    }

    /// Aborts every timer. Pending orders are picked up again by the next `rearm_pending`.
    pub fn shutdown(&self) {
        for (_, handle) in self.lock_timers().drain() {
            handle.abort();
        }
    }

    /// Expiration action: flip the order to expired, then re-render its message and post a
    /// notice. Returns false when the order was no longer pending.
    ///
    /// Message failures are logged and swallowed; only store errors are returned.
    #[instrument(skip(self))]
    pub async fn expire(&self, order_id: i64) -> Result<bool> {
        if !self
            .store
            .transition_from_pending(order_id, OrderStatus::Expired)
            .await?
        {
            info!(order_id, "Order no longer pending, expiration skipped");
            return Ok(false);
        }

        let Some(order) = self.store.get_order(order_id).await? else {
            return Ok(false);
        };
        info!(order_id, product = %order.product, "Order expired");

        if let Err(e) = self.publish_expired(&order).await {
            warn!(error = %e, order_id, "Failed to update expired order message");
        }
        Ok(true)
    }

    async fn publish_expired(&self, order: &Order) -> Result<()> {
        let message_id = order.message_id.as_deref().ok_or_else(|| {
            BotError::Platform(format!("order {} has no announcement message", order.id))
        })?;
        self.board
            .edit_order(&order.channel_id, message_id, &OrderView::render(order))
            .await?;
        self.board
            .send_notice(&order.channel_id, &expired_notice(order))
            .await?;
        Ok(())
    }

    fn forget(&self, order_id: i64) {
        self.lock_timers().remove(&order_id);
    }

    fn lock_timers(&self) -> std::sync::MutexGuard<'_, HashMap<i64, JoinHandle<()>>> {
        self.timers.lock().unwrap_or_else(|e| e.into_inner())
    }
}
