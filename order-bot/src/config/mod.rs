//! Bot configuration: BaseConfig (Discord + log + DB) plus the keep-alive HTTP port.

mod base;
mod bot_config;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
