//! Handler trait and transport conversion trait.

use async_trait::async_trait;

use super::{event::InteractionEvent, response::HandlerResponse};

/// Converts a transport-specific interaction into an [`InteractionEvent`].
/// Returns None for interaction shapes the bot does not handle.
pub trait ToInteractionEvent: Send + Sync {
    fn to_event(&self) -> Option<InteractionEvent>;
}

/// One interaction handler. The router asks each handler in turn; the first `Reply` wins.
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    async fn handle(&self, event: &InteractionEvent) -> crate::core::error::Result<HandlerResponse>;
}
