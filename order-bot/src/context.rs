//! Application context: the store, chat platform handles and scheduler shared by every handler.

use std::sync::Arc;

use storage::{OrderRepository, OrderStore};
use tracing::{error, instrument};

use crate::config::BotConfig;
use crate::core::{MemberDirectory, OrderBoard};
use crate::orders::ExpirationScheduler;

/// Dependencies for handlers and background timers; built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn OrderStore>,
    pub board: Arc<dyn OrderBoard>,
    pub directory: Arc<dyn MemberDirectory>,
    pub scheduler: ExpirationScheduler,
    /// Channel new orders are announced in.
    pub order_channel_id: String,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn OrderStore>,
        board: Arc<dyn OrderBoard>,
        directory: Arc<dyn MemberDirectory>,
        order_channel_id: impl Into<String>,
    ) -> Self {
        let scheduler = ExpirationScheduler::new(store.clone(), board.clone());
        Self {
            store,
            board,
            directory,
            scheduler,
            order_channel_id: order_channel_id.into(),
        }
    }

    /// Stops background timers. Stored orders are untouched.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }
}

/// Opens the order store configured by `DATABASE_URL`.
#[instrument(skip(config))]
pub async fn open_store(config: &BotConfig) -> anyhow::Result<Arc<dyn OrderStore>> {
    let repo = OrderRepository::new(config.database_url())
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url(),
                "Failed to initialize order storage"
            );
            anyhow::anyhow!("Failed to initialize order storage: {}", e)
        })?;
    Ok(Arc::new(repo))
}
