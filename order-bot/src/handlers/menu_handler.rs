//! Slash command handler: shows the order menu.

use async_trait::async_trait;
use tracing::info;

use crate::core::{HandlerResponse, InteractionEvent, InteractionHandler, InteractionReply, Result};
use crate::orders::view::{menu_view, MENU_COMMAND};

/// Answers the `order-menu` command with the menu embed and its create button.
#[derive(Clone, Default)]
pub struct MenuHandler;

impl MenuHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InteractionHandler for MenuHandler {
    async fn handle(&self, event: &InteractionEvent) -> Result<HandlerResponse> {
        match event {
            InteractionEvent::Command { name, actor } if name == MENU_COMMAND => {
                info!(user_id = actor.id, "step: showing order menu");
                Ok(HandlerResponse::Reply(InteractionReply::Menu(menu_view())))
            }
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}
