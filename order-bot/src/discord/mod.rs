//! Discord transport layer (serenity): interaction adapter, board and directory implementations,
//! view rendering, and the gateway client runner.

mod adapters;
mod board_adapter;
mod render;
mod runner;

pub use adapters::{member_ref, DiscordInteraction};
pub use board_adapter::{DiscordBoard, DiscordDirectory};
pub use runner::{register_commands, start, OrderEventHandler};
