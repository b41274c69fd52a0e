//! Core types and traits: interaction handler, board and directory seams, error, logger.
//! Transport-agnostic.

pub mod board;
pub mod error;
pub mod logger;
pub mod types;

pub use board::{parse_snowflake, MemberDirectory, OrderBoard};
pub use error::{BotError, OrderError, Result};
pub use logger::init_tracing;
pub use types::{
    Actor, HandlerResponse, InteractionEvent, InteractionHandler, InteractionReply, MemberRef,
    ToInteractionEvent,
};
