//! Accept/deny button handler.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::context::AppContext;
use crate::core::{
    BotError, HandlerResponse, InteractionEvent, InteractionHandler, InteractionReply, Result,
};
use crate::orders::view::action_ack;
use crate::orders::{apply_action, OrderAction};

/// Handles `accept_<id>` and `deny_<id>` presses by the order's customer.
#[derive(Clone)]
pub struct OrderActionHandler {
    ctx: AppContext,
}

impl OrderActionHandler {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl InteractionHandler for OrderActionHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InteractionEvent) -> Result<HandlerResponse> {
        let InteractionEvent::Button { custom_id, actor } = event else {
            return Ok(HandlerResponse::Ignore);
        };
        let Some((action, order_id)) = OrderAction::parse_custom_id(custom_id) else {
            return Ok(HandlerResponse::Ignore);
        };

        info!(user_id = actor.id, order_id, action = %action, "step: order action pressed");

        let text = match apply_action(&self.ctx, action, order_id, actor).await {
            Ok(_) => action_ack(action).to_string(),
            Err(BotError::Order(e)) => e.user_message(),
            Err(e) => return Err(e),
        };
        Ok(HandlerResponse::Reply(InteractionReply::Ephemeral(text)))
    }
}
