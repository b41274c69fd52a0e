//! Chat platform abstractions used by the order domain.
//!
//! [`OrderBoard`] posts and edits announcement messages; [`MemberDirectory`] looks up guild
//! members. Both are transport-agnostic: `discord` implements them via serenity, tests
//! substitute recording mocks.

use async_trait::async_trait;

use super::error::Result;
use super::types::{MemberRef, OrderView};

/// Sends, edits and announces order messages in a channel.
#[async_trait]
pub trait OrderBoard: Send + Sync {
    /// Posts the announcement message for an order and returns the new message id.
    async fn post_order(&self, channel_id: &str, view: &OrderView) -> Result<String>;
    /// Replaces embed and buttons of an already posted announcement message.
    async fn edit_order(&self, channel_id: &str, message_id: &str, view: &OrderView)
        -> Result<()>;
    /// Posts a plain text message to the channel.
    async fn send_notice(&self, channel_id: &str, text: &str) -> Result<()>;
}

/// Guild member lookup: a local cache plus a bounded remote search.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Members currently held in the local cache for the guild (may be incomplete).
    async fn cached_members(&self, guild_id: u64) -> Vec<MemberRef>;
    /// Remote member search by name; returns at most `limit` members.
    async fn search_members(&self, guild_id: u64, query: &str, limit: u64)
        -> Result<Vec<MemberRef>>;
}

/// Parses a platform snowflake id string. Zero and non-numeric values are rejected.
pub fn parse_snowflake(kind: &str, s: &str) -> Result<u64> {
    match s.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(super::error::BotError::Platform(format!(
            "Invalid {} id: {:?}",
            kind, s
        ))),
    }
}
