//! Modal submission handler: creates an order.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::context::AppContext;
use crate::core::{
    BotError, HandlerResponse, InteractionEvent, InteractionHandler, InteractionReply, Result,
};
use crate::orders::scheduler::now_ms;
use crate::orders::view::{created_ack, CREATE_ORDER_MODAL_ID};
use crate::orders::{create_order, OrderForm};

/// Runs the creation flow for the order modal. Rejections become ephemeral replies.
#[derive(Clone)]
pub struct CreateOrderHandler {
    ctx: AppContext,
}

impl CreateOrderHandler {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl InteractionHandler for CreateOrderHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InteractionEvent) -> Result<HandlerResponse> {
        let InteractionEvent::ModalSubmit {
            custom_id,
            fields,
            actor,
            guild_id,
        } = event
        else {
            return Ok(HandlerResponse::Ignore);
        };
        if custom_id != CREATE_ORDER_MODAL_ID {
            return Ok(HandlerResponse::Ignore);
        }

        info!(user_id = actor.id, "step: order form submitted");

        let created = match OrderForm::from_fields(fields) {
            Ok(form) => create_order(&self.ctx, &form, *guild_id, now_ms()).await,
            Err(e) => Err(e.into()),
        };

        let text = match created {
            Ok(order) => created_ack(order.id),
            Err(BotError::Order(e)) => {
                info!(user_id = actor.id, reason = %e, "Order form rejected");
                e.user_message()
            }
            Err(e) => return Err(e),
        };
        Ok(HandlerResponse::Reply(InteractionReply::Ephemeral(text)))
    }
}
