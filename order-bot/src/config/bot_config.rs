//! BotConfig: BaseConfig + keep-alive server port. Use load() for env-based loading.

use anyhow::{Context, Result};
use std::env;

use super::BaseConfig;

/// Default port of the keep-alive HTTP endpoint.
pub const DEFAULT_PORT: u16 = 3000;

/// Bot config. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    /// PORT
    pub http_port: u16,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides DISCORD_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let http_port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { base, http_port })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn discord_token(&self) -> &str {
        &self.base.discord_token
    }
    pub fn application_id(&self) -> u64 {
        self.base.application_id
    }
    pub fn guild_id(&self) -> u64 {
        self.base.guild_id
    }
    pub fn order_channel_id(&self) -> u64 {
        self.base.order_channel_id
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn http_port(&self) -> u16 {
        self.http_port
    }
}
