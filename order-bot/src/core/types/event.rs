//! Transport-neutral interaction events.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::member::Actor;

/// One inbound interaction, reduced to what the handlers need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    /// Slash command invocation.
    Command { name: String, actor: Actor },
    /// Button press; `custom_id` is either static or `<action>_<orderId>`.
    Button { custom_id: String, actor: Actor },
    /// Modal submission with text input values keyed by input custom id.
    ModalSubmit {
        custom_id: String,
        fields: HashMap<String, String>,
        actor: Actor,
        guild_id: Option<u64>,
    },
}

impl InteractionEvent {
    pub fn actor(&self) -> &Actor {
        match self {
            InteractionEvent::Command { actor, .. }
            | InteractionEvent::Button { actor, .. }
            | InteractionEvent::ModalSubmit { actor, .. } => actor,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            InteractionEvent::Command { .. } => "command",
            InteractionEvent::Button { .. } => "button",
            InteractionEvent::ModalSubmit { .. } => "modal_submit",
        }
    }
}
