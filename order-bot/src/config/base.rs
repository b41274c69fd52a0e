//! Base config: Discord connection, logging, database. Loaded from env.

use anyhow::{Context, Result};
use std::env;

/// Base config: Discord ids and token, logging, database.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// DISCORD_TOKEN
    pub discord_token: String,
    /// APPLICATION_ID; needed to register the slash command before connecting
    pub application_id: u64,
    /// GUILD_ID; the guild the command is registered in
    pub guild_id: u64,
    /// ORDER_CHANNEL_ID; where order messages are posted
    pub order_channel_id: u64,
    /// Log file path
    pub log_file: String,
    /// Order database (SQLite file path or `sqlite:` URL)
    pub database_url: String,
}

fn required_id(key: &str) -> Result<u64> {
    let raw = env::var(key).with_context(|| format!("{} not set", key))?;
    raw.trim()
        .parse()
        .with_context(|| format!("{} is not a numeric id: {}", key, raw))
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides DISCORD_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let discord_token = match token {
            Some(token) => token,
            None => env::var("DISCORD_TOKEN").context("DISCORD_TOKEN not set")?,
        };
        let application_id = required_id("APPLICATION_ID")?;
        let guild_id = required_id("GUILD_ID")?;
        let order_channel_id = required_id("ORDER_CHANNEL_ID")?;
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "orders.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/order-bot.log".to_string());

        Ok(Self {
            discord_token,
            application_id,
            guild_id,
            order_channel_id,
            log_file,
            database_url,
        })
    }

    /// Validate config (non-empty token, non-zero ids).
    pub fn validate(&self) -> Result<()> {
        if self.discord_token.trim().is_empty() {
            anyhow::bail!("DISCORD_TOKEN is empty");
        }
        for (key, id) in [
            ("APPLICATION_ID", self.application_id),
            ("GUILD_ID", self.guild_id),
            ("ORDER_CHANNEL_ID", self.order_channel_id),
        ] {
            if id == 0 {
                anyhow::bail!("{} must be a non-zero id", key);
            }
        }
        Ok(())
    }
}
