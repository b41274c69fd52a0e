//! # Interaction router
//!
//! Runs a sequence of handlers for each interaction. Handlers are asked in order; the first
//! one that replies ends the dispatch. Events no handler claims are ignored.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::context::AppContext;
use crate::core::{HandlerResponse, InteractionEvent, InteractionHandler, InteractionReply, Result};
use crate::handlers::{CreateOrderHandler, MenuHandler, OpenFormHandler, OrderActionHandler};

/// Ordered list of interaction handlers.
#[derive(Clone, Default)]
pub struct Router {
    handlers: Vec<Arc<dyn InteractionHandler>>,
}

impl Router {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Router with the bot's handlers: menu command, create button, order modal, accept/deny.
    pub fn for_context(ctx: &AppContext) -> Self {
        Self::new()
            .add_handler(Arc::new(MenuHandler::new()))
            .add_handler(Arc::new(OpenFormHandler::new()))
            .add_handler(Arc::new(CreateOrderHandler::new(ctx.clone())))
            .add_handler(Arc::new(OrderActionHandler::new(ctx.clone())))
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn InteractionHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Asks each handler in turn. Returns the first reply, or None when every handler ignored the event.
    #[instrument(skip(self, event), fields(kind = event.kind(), user_id = event.actor().id))]
    pub async fn dispatch(&self, event: &InteractionEvent) -> Result<Option<InteractionReply>> {
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            match h.handle(event).await? {
                HandlerResponse::Reply(reply) => {
                    debug!(handler = %name, reply = ?reply, "step: handler replied");
                    return Ok(Some(reply));
                }
                HandlerResponse::Ignore => {}
            }
        }

        info!("step: no handler for interaction, ignored");
        Ok(None)
    }
}

// Dispatch scenarios live in tests/router_test.rs
