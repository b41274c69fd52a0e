//! Order creation from the submitted modal form.

use std::collections::HashMap;

use storage::{NewOrder, Order, OrderStatus};
use tracing::{info, instrument, warn};

use super::resolver::resolve_customer;
use super::view::{
    OrderView, FIELD_CUSTOMER, FIELD_EXPIRE_HOURS, FIELD_NOTE, FIELD_PRICE, FIELD_PRODUCT,
    NO_NOTE,
};
use crate::context::AppContext;
use crate::core::{BotError, OrderError, Result};

/// Longest accepted expiration window (one year).
pub const MAX_EXPIRE_HOURS: f64 = 24.0 * 365.0;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Values of the creation modal, trimmed. `note` is None when left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub product: String,
    pub customer: String,
    pub expire_hours: String,
    pub price: String,
    pub note: Option<String>,
}

impl OrderForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> std::result::Result<Self, OrderError> {
        let required = |key: &'static str| -> std::result::Result<String, OrderError> {
            fields
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(OrderError::MissingField(key))
        };

        Ok(Self {
            product: required(FIELD_PRODUCT)?,
            customer: required(FIELD_CUSTOMER)?,
            expire_hours: required(FIELD_EXPIRE_HOURS)?,
            price: required(FIELD_PRICE)?,
            note: fields
                .get(FIELD_NOTE)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

/// Parses the expiration window. Must be a finite number of hours in (0, MAX_EXPIRE_HOURS].
pub fn parse_expire_hours(raw: &str) -> std::result::Result<f64, OrderError> {
    let invalid = || OrderError::InvalidHours(raw.to_string());
    let hours: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !hours.is_finite() || hours <= 0.0 || hours > MAX_EXPIRE_HOURS {
        return Err(invalid());
    }
    Ok(hours)
}

/// Converts hours to whole milliseconds.
pub fn hours_to_ms(hours: f64) -> i64 {
    (hours * MS_PER_HOUR).round() as i64
}

/// Runs the creation flow: validate, resolve the customer, insert, post the announcement,
/// link it, and arm the expiration timer.
///
/// Nothing is inserted when validation or customer resolution fails. If the announcement
/// cannot be posted or linked, the inserted order is closed as expired and
/// [`OrderError::AnnouncementFailed`] is returned.
#[instrument(skip(ctx, form), fields(product = %form.product))]
pub async fn create_order(
    ctx: &AppContext,
    form: &OrderForm,
    guild_id: Option<u64>,
    now_ms: i64,
) -> Result<Order> {
    let hours = parse_expire_hours(&form.expire_hours)?;
    let customer = resolve_customer(ctx.directory.as_ref(), guild_id, &form.customer).await?;

    let draft = NewOrder {
        product: form.product.clone(),
        customer_info: customer.mention.clone(),
        customer_id: Some(customer.id.to_string()),
        price: form.price.clone(),
        note: form.note.clone().unwrap_or_else(|| NO_NOTE.to_string()),
        expire_at: now_ms + hours_to_ms(hours),
        channel_id: ctx.order_channel_id.clone(),
        created_at: now_ms,
    };

    let id = ctx.store.insert_order(&draft).await?;
    let mut order = draft.into_order(id);

    let message_id = match ctx
        .board
        .post_order(&order.channel_id, &OrderView::render(&order))
        .await
    {
        Ok(message_id) => message_id,
        Err(e) => return Err(abandon(ctx, order, None, e).await),
    };
    match ctx.store.attach_message_id(id, &message_id).await {
        Ok(true) => {}
        Ok(false) => {
            let cause = BotError::Platform(format!("message link refused for order {}", id));
            return Err(abandon(ctx, order, Some(&message_id), cause).await);
        }
        Err(e) => return Err(abandon(ctx, order, Some(&message_id), e.into()).await),
    }
    order.message_id = Some(message_id);

    ctx.scheduler.arm(&order);
    info!(order_id = id, customer_id = customer.id, expire_at = order.expire_at, "Order created");

    Ok(order)
}

/// Closes an order whose announcement failed so it is not left pending without a timer.
/// A message that did get posted is switched to the expired view. If the store cannot close
/// the order, its timer is armed instead and expires it later.
async fn abandon(
    ctx: &AppContext,
    mut order: Order,
    message_id: Option<&str>,
    cause: BotError,
) -> BotError {
    warn!(error = %cause, order_id = order.id, "Order announcement failed, closing order");

    match ctx
        .store
        .transition_from_pending(order.id, OrderStatus::Expired)
        .await
    {
        Ok(_) => order.status = OrderStatus::Expired,
        Err(e) => {
            warn!(error = %e, order_id = order.id, "Failed to close order, arming its timer");
            ctx.scheduler.arm(&order);
        }
    }

    if let Some(message_id) = message_id {
        if let Err(e) = ctx
            .board
            .edit_order(&order.channel_id, message_id, &OrderView::render(&order))
            .await
        {
            warn!(error = %e, order_id = order.id, "Failed to update unlinked order message");
        }
    }

    OrderError::AnnouncementFailed(order.id).into()
}
