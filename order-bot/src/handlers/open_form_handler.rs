//! Create-button handler: opens the order creation modal.

use async_trait::async_trait;

use crate::core::{HandlerResponse, InteractionEvent, InteractionHandler, InteractionReply, Result};
use crate::orders::view::{order_form, CREATE_ORDER_BUTTON_ID};

#[derive(Clone, Default)]
pub struct OpenFormHandler;

impl OpenFormHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InteractionHandler for OpenFormHandler {
    async fn handle(&self, event: &InteractionEvent) -> Result<HandlerResponse> {
        match event {
            InteractionEvent::Button { custom_id, .. } if custom_id == CREATE_ORDER_BUTTON_ID => {
                Ok(HandlerResponse::Reply(InteractionReply::Form(order_form())))
            }
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}
