//! Core types: actors and members, interaction events, handler responses, message views, and
//! the handler trait.

mod event;
mod handler;
mod member;
mod response;
mod view;

pub use event::InteractionEvent;
pub use handler::{InteractionHandler, ToInteractionEvent};
pub use member::{Actor, MemberRef};
pub use response::{HandlerResponse, InteractionReply};
pub use view::{
    ButtonKind, ButtonView, EmbedField, FormField, FormView, InputStyle, MenuView, OrderView,
};
