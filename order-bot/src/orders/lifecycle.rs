//! Order lifecycle: pending → accepted | denied | expired.
//!
//! Accept and deny are gated on the acting member being the order's customer. Every terminal
//! transition goes through the store's conditional write, so exactly one of accept, deny and
//! expiry can win for a given order.

use std::fmt;

use storage::{Order, OrderStatus};
use tracing::{info, instrument, warn};

use super::resolver::parse_mention_id;
use super::view::OrderView;
use crate::context::AppContext;
use crate::core::{Actor, OrderError, Result};

/// Customer action carried by the dynamic `<action>_<orderId>` button ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Accept,
    Deny,
}

impl OrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Accept => "accept",
            OrderAction::Deny => "deny",
        }
    }

    pub fn target_status(&self) -> OrderStatus {
        match self {
            OrderAction::Accept => OrderStatus::Accepted,
            OrderAction::Deny => OrderStatus::Denied,
        }
    }

    /// Button custom id for this action on the given order.
    pub fn custom_id(&self, order_id: i64) -> String {
        format!("{}_{}", self.as_str(), order_id)
    }

    /// Parses `accept_<id>` / `deny_<id>`. Anything else yields None.
    pub fn parse_custom_id(custom_id: &str) -> Option<(OrderAction, i64)> {
        let (action, id) = custom_id.split_once('_')?;
        let action = match action {
            "accept" => OrderAction::Accept,
            "deny" => OrderAction::Deny,
            _ => return None,
        };
        let id = id.parse::<i64>().ok()?;
        Some((action, id))
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member id of the order's customer: the stored `customer_id`, or for older rows the id
/// inside the canonical mention in `customer_info`.
pub fn customer_id_of(order: &Order) -> Option<u64> {
    match &order.customer_id {
        Some(id) => id.parse().ok(),
        None => parse_mention_id(&order.customer_info),
    }
}

/// Exact comparison of the actor with the order's customer.
pub fn is_customer(order: &Order, actor_id: u64) -> bool {
    customer_id_of(order) == Some(actor_id)
}

/// Applies accept/deny for `actor` and re-renders the announcement message.
///
/// Rejections (unknown order, wrong member, already closed) are returned as
/// [`OrderError`] and leave both the store and the message untouched. A failed message
/// edit after a successful transition is logged; the transition stands.
#[instrument(skip(ctx, actor), fields(actor_id = actor.id))]
pub async fn apply_action(
    ctx: &AppContext,
    action: OrderAction,
    order_id: i64,
    actor: &Actor,
) -> Result<Order> {
    let order = ctx
        .store
        .get_order(order_id)
        .await?
        .ok_or(OrderError::NotFound(order_id))?;

    if !is_customer(&order, actor.id) {
        info!(order_id, "Rejected order action from non-customer");
        return Err(OrderError::NotCustomer {
            order_id,
            actor_id: actor.id,
        }
        .into());
    }

    let target = action.target_status();
    if !ctx.store.transition_from_pending(order_id, target).await? {
        let status = ctx
            .store
            .get_order(order_id)
            .await?
            .map(|o| o.status)
            .unwrap_or(order.status);
        info!(order_id, status = %status, "Order already closed");
        return Err(OrderError::AlreadyClosed {
            id: order_id,
            status,
        }
        .into());
    }

    ctx.scheduler.cancel(order_id);
    info!(order_id, status = %target, "Order closed by customer");

    let closed = Order {
        status: target,
        ..order
    };

    match &closed.message_id {
        Some(message_id) => {
            if let Err(e) = ctx
                .board
                .edit_order(&closed.channel_id, message_id, &OrderView::render(&closed))
                .await
            {
                warn!(error = %e, order_id, "Failed to update order message");
            }
        }
        None => warn!(order_id, "Order has no message to update"),
    }

    Ok(closed)
}
