//! Order repository: persistence and queries for orders.
//!
//! Uses SqlitePoolManager and the models (Order, NewOrder, OrderStatus).
//! Every operation is a single statement on a single row.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::{NewOrder, Order, OrderStatus};
use crate::repository::OrderStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct OrderRepository {
    pool_manager: SqlitePoolManager,
}

impl OrderRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating orders table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product TEXT NOT NULL,
                customerInfo TEXT NOT NULL,
                customerId TEXT,
                price TEXT NOT NULL,
                note TEXT NOT NULL,
                expireAt INTEGER NOT NULL,
                status TEXT NOT NULL,
                channelId TEXT NOT NULL,
                messageId TEXT,
                createdAt INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Tables created by earlier deployments lack customerId.
        let (has_customer_id,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM pragma_table_info('orders') WHERE name = 'customerId'",
        )
        .fetch_one(pool)
        .await?;
        if has_customer_id == 0 {
            info!("Adding customerId column to existing orders table");
            sqlx::query("ALTER TABLE orders ADD COLUMN customerId TEXT")
                .execute(pool)
                .await?;
        }

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_status ON orders(status)")
            .execute(pool)
            .await?;

        info!("Orders table ready");
        Ok(())
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert_order(&self, draft: &NewOrder) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            INSERT INTO orders (product, customerInfo, customerId, price, note, expireAt, status, channelId, messageId, createdAt)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, NULL, ?)
            "#,
        )
        .bind(&draft.product)
        .bind(&draft.customer_info)
        .bind(&draft.customer_id)
        .bind(&draft.price)
        .bind(&draft.note)
        .bind(draft.expire_at)
        .bind(OrderStatus::Pending)
        .bind(&draft.channel_id)
        .bind(draft.created_at)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(order_id = id, product = %draft.product, "Inserted order");
        Ok(id)
    }

    async fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError> {
        let pool = self.pool_manager.pool();

        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(order)
    }

    async fn get_pending_orders(&self) -> Result<Vec<Order>, StorageError> {
        let pool = self.pool_manager.pool();

        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE status = ? ORDER BY expireAt ASC, id ASC",
        )
        .bind(OrderStatus::Pending)
        .fetch_all(pool)
        .await?;

        info!("Retrieved {} pending orders", orders.len());
        Ok(orders)
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<bool, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;

        debug!(order_id = id, status = %status, rows = result.rows_affected(), "Updated order status");
        Ok(result.rows_affected() == 1)
    }

    async fn transition_from_pending(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<bool, StorageError> {
        if !status.is_terminal() {
            return Err(StorageError::InvalidStatus(format!(
                "cannot transition order {} to {}",
                id, status
            )));
        }

        let pool = self.pool_manager.pool();

        let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ? AND status = ?")
            .bind(status)
            .bind(id)
            .bind(OrderStatus::Pending)
            .execute(pool)
            .await?;

        let won = result.rows_affected() == 1;
        debug!(order_id = id, status = %status, won, "Conditional status transition");
        Ok(won)
    }

    async fn attach_message_id(&self, id: i64, message_id: &str) -> Result<bool, StorageError> {
        let pool = self.pool_manager.pool();

        let result =
            sqlx::query("UPDATE orders SET messageId = ? WHERE id = ? AND messageId IS NULL")
                .bind(message_id)
                .bind(id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() == 1)
    }
}
