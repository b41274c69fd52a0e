use anyhow::Result;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::context::open_store;
use crate::core::init_tracing;
use crate::discord;
use crate::keepalive;

/// Main entry: validate config, init logging, open the order store, start the keep-alive
/// server, then run the Discord client until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        guild_id = config.guild_id(),
        order_channel_id = config.order_channel_id(),
        port = config.http_port(),
        "Initializing bot"
    );

    let store = open_store(&config).await?;

    let port = config.http_port();
    tokio::spawn(async move {
        if let Err(e) = keepalive::serve(port).await {
            error!(error = %e, port, "Keep-alive server stopped");
        }
    });

    discord::start(&config, store).await?;

    info!("Bot stopped");
    Ok(())
}
