//! Handler result types.

use super::view::{FormView, MenuView};

/// What the transport should send back for an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionReply {
    /// Public message with the order menu.
    Menu(MenuView),
    /// Open the order creation modal.
    Form(FormView),
    /// Reply visible only to the interacting member.
    Ephemeral(String),
}

/// Handler result for the router. `Ignore` passes the event to the next handler.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResponse {
    Ignore,
    Reply(InteractionReply),
}
