//! Gateway client runner: serenity event handler that converts interactions to
//! [`InteractionEvent`]s, dispatches them through the [`Router`] and sends the reply.

use std::sync::{Arc, OnceLock};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serenity::all::{
    ApplicationId, Client, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, EventHandler, GatewayIntents,
    GuildId, Http, Interaction, Ready,
};
use storage::OrderStore;
use tracing::{error, info, instrument, warn};

use super::adapters::DiscordInteraction;
use super::board_adapter::{DiscordBoard, DiscordDirectory};
use super::render::{form_modal, menu_components, menu_embed};
use crate::config::BotConfig;
use crate::context::AppContext;
use crate::core::{BotError, InteractionEvent, InteractionReply, ToInteractionEvent};
use crate::orders::view::{
    CREATE_ORDER_MODAL_ID, INTERACTION_FAILED, MENU_COMMAND, MENU_COMMAND_DESCRIPTION,
};
use crate::router::Router;

/// serenity event handler. Interactions arriving before the router is installed are dropped.
pub struct OrderEventHandler {
    router: Arc<OnceLock<Router>>,
}

impl OrderEventHandler {
    pub fn new(router: Arc<OnceLock<Router>>) -> Self {
        Self { router }
    }
}

#[async_trait]
impl EventHandler for OrderEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Bot connected"
        );
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(router) = self.router.get() else {
            warn!("Interaction received before startup finished, dropped");
            return;
        };
        let Some(event) = DiscordInteraction(&interaction).to_event() else {
            return;
        };

        info!(
            kind = event.kind(),
            user_id = event.actor().id,
            "Received interaction"
        );

        if let Err(e) = respond(&ctx, router, &interaction, &event).await {
            error!(
                error = %e,
                kind = event.kind(),
                user_id = event.actor().id,
                "Interaction failed"
            );
        }
    }
}

fn platform_error(e: serenity::Error) -> BotError {
    BotError::Platform(e.to_string())
}

fn response_for(reply: InteractionReply) -> CreateInteractionResponse {
    match reply {
        InteractionReply::Menu(menu) => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(menu_embed(&menu))
                .components(menu_components(&menu)),
        ),
        InteractionReply::Form(form) => CreateInteractionResponse::Modal(form_modal(&form)),
        InteractionReply::Ephemeral(text) => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(text)
                .ephemeral(true),
        ),
    }
}

/// Text for the deferred reply. A failed dispatch still gets an answer so the member is not
/// left waiting on the deferred response.
fn deferred_reply_text(result: &crate::core::Result<Option<InteractionReply>>) -> Option<String> {
    match result {
        Ok(Some(InteractionReply::Ephemeral(text))) => Some(text.clone()),
        Ok(_) => None,
        Err(_) => Some(INTERACTION_FAILED.to_string()),
    }
}

/// Dispatches one event and answers the interaction.
///
/// The order modal is deferred first: order creation may search members and post a message,
/// which can outlast the interaction response window. Its reply edits the deferred response.
async fn respond(
    ctx: &Context,
    router: &Router,
    interaction: &Interaction,
    event: &InteractionEvent,
) -> crate::core::Result<()> {
    match interaction {
        Interaction::Modal(modal) => {
            if modal.data.custom_id != CREATE_ORDER_MODAL_ID {
                return Ok(());
            }
            modal
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Defer(
                        CreateInteractionResponseMessage::new().ephemeral(true),
                    ),
                )
                .await
                .map_err(platform_error)?;

            let result = router.dispatch(event).await;
            if let Some(text) = deferred_reply_text(&result) {
                modal
                    .edit_response(&ctx.http, EditInteractionResponse::new().content(text))
                    .await
                    .map_err(platform_error)?;
            }
            result?;
        }
        Interaction::Command(command) => {
            if let Some(reply) = router.dispatch(event).await? {
                command
                    .create_response(&ctx.http, response_for(reply))
                    .await
                    .map_err(platform_error)?;
            }
        }
        Interaction::Component(component) => {
            if let Some(reply) = router.dispatch(event).await? {
                component
                    .create_response(&ctx.http, response_for(reply))
                    .await
                    .map_err(platform_error)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Registers the `order-menu` slash command in the guild, replacing existing guild commands.
#[instrument(skip(http))]
pub async fn register_commands(http: &Http, guild_id: u64) -> Result<()> {
    let commands =
        vec![CreateCommand::new(MENU_COMMAND).description(MENU_COMMAND_DESCRIPTION)];
    GuildId::new(guild_id)
        .set_commands(http, commands)
        .await
        .map_err(|e| anyhow!("Failed to register guild commands: {}", e))?;
    info!(guild_id, command = MENU_COMMAND, "Guild command registered");
    Ok(())
}

/// Builds the gateway client and runs it until shutdown.
///
/// Pending orders are loaded and their timers armed, and the slash command registered, before
/// the router is installed and the gateway connects. Ctrl-C stops the timers and the shards.
#[instrument(skip(config, store))]
pub async fn start(config: &BotConfig, store: Arc<dyn OrderStore>) -> Result<()> {
    let router_cell = Arc::new(OnceLock::new());
    let mut client = Client::builder(config.discord_token(), GatewayIntents::GUILDS)
        .event_handler(OrderEventHandler::new(router_cell.clone()))
        .await
        .map_err(|e| anyhow!("Failed to build Discord client: {}", e))?;
    client
        .http
        .set_application_id(ApplicationId::new(config.application_id()));

    let board = Arc::new(DiscordBoard::new(client.http.clone()));
    let directory = Arc::new(DiscordDirectory::new(
        client.cache.clone(),
        client.http.clone(),
    ));
    let ctx = AppContext::new(
        store,
        board,
        directory,
        config.order_channel_id().to_string(),
    );

    let summary = ctx.scheduler.rearm_pending().await?;
    info!(
        armed = summary.armed,
        expired = summary.expired,
        "step: pending orders loaded"
    );
    register_commands(&client.http, config.guild_id()).await?;
    router_cell
        .set(Router::for_context(&ctx))
        .map_err(|_| anyhow!("Router already installed"))?;

    let shard_manager = client.shard_manager.clone();
    let shutdown_ctx = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            shutdown_ctx.shutdown();
            shard_manager.shutdown_all().await;
        }
    });

    info!("Bot started successfully");
    client
        .start()
        .await
        .map_err(|e| anyhow!("Discord client stopped with error: {}", e))?;
    Ok(())
}
