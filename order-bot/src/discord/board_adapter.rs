//! serenity-backed implementations of [`OrderBoard`] and [`MemberDirectory`].

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{Cache, ChannelId, CreateMessage, EditMessage, GuildId, Http, MessageId};

use super::adapters::member_ref;
use super::render::{order_components, order_embed};
use crate::core::{parse_snowflake, BotError, MemberDirectory, MemberRef, OrderBoard, Result};
use crate::orders::view::OrderView;

fn platform_error(e: serenity::Error) -> BotError {
    BotError::Platform(e.to_string())
}

fn channel(channel_id: &str) -> Result<ChannelId> {
    Ok(ChannelId::new(parse_snowflake("channel", channel_id)?))
}

/// Posts and edits order messages through the Discord HTTP API.
pub struct DiscordBoard {
    http: Arc<Http>,
}

impl DiscordBoard {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl OrderBoard for DiscordBoard {
    async fn post_order(&self, channel_id: &str, view: &OrderView) -> Result<String> {
        let message = channel(channel_id)?
            .send_message(
                &self.http,
                CreateMessage::new()
                    .embed(order_embed(view))
                    .components(order_components(view)),
            )
            .await
            .map_err(platform_error)?;
        Ok(message.id.to_string())
    }

    async fn edit_order(
        &self,
        channel_id: &str,
        message_id: &str,
        view: &OrderView,
    ) -> Result<()> {
        let message_id = MessageId::new(parse_snowflake("message", message_id)?);
        channel(channel_id)?
            .edit_message(
                &self.http,
                message_id,
                EditMessage::new()
                    .embed(order_embed(view))
                    .components(order_components(view)),
            )
            .await
            .map_err(platform_error)?;
        Ok(())
    }

    async fn send_notice(&self, channel_id: &str, text: &str) -> Result<()> {
        channel(channel_id)?
            .say(&self.http, text)
            .await
            .map_err(platform_error)?;
        Ok(())
    }
}

/// Member lookup against the gateway cache and the guild member search endpoint.
pub struct DiscordDirectory {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl DiscordDirectory {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl MemberDirectory for DiscordDirectory {
    async fn cached_members(&self, guild_id: u64) -> Vec<MemberRef> {
        if guild_id == 0 {
            return Vec::new();
        }
        self.cache
            .guild(GuildId::new(guild_id))
            .map(|guild| guild.members.values().map(member_ref).collect())
            .unwrap_or_default()
    }

    async fn search_members(
        &self,
        guild_id: u64,
        query: &str,
        limit: u64,
    ) -> Result<Vec<MemberRef>> {
        if guild_id == 0 {
            return Err(BotError::Platform("Invalid guild id: 0".to_string()));
        }
        let members = GuildId::new(guild_id)
            .search_members(&self.http, query, Some(limit))
            .await
            .map_err(platform_error)?;
        Ok(members.iter().map(member_ref).collect())
    }
}
