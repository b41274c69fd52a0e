//! # Discord order bot
//!
//! Staff open an order form from a menu; the bot posts each order with accept/deny buttons
//! for the named customer, stores it in SQLite, and expires it after its time window.
//! Order logic is transport-neutral (core, orders, handlers, router); `discord` holds the
//! serenity transport.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod discord;
pub mod handlers;
pub mod keepalive;
pub mod orders;
pub mod router;
pub mod runner;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, Actor, BotError, HandlerResponse, InteractionEvent, InteractionHandler,
    InteractionReply, MemberDirectory, MemberRef, OrderBoard, OrderError, Result,
    ToInteractionEvent,
};

pub use config::{BaseConfig, BotConfig};
pub use context::{open_store, AppContext};
pub use router::Router;
pub use runner::run_bot;

pub use handlers::{CreateOrderHandler, MenuHandler, OpenFormHandler, OrderActionHandler};
