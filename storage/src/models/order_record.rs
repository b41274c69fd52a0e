//! Order record model for persistence.
//!
//! Maps to the `orders` table. Column names keep the camelCase layout of the
//! table so databases written by earlier deployments stay readable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Lifecycle status of an order. `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Denied,
    Expired,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Denied => "denied",
            OrderStatus::Expired => "expired",
        }
    }

    /// True for accepted, denied and expired.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "accepted" => Ok(OrderStatus::Accepted),
            "denied" => Ok(OrderStatus::Denied),
            "expired" => Ok(OrderStatus::Expired),
            other => Err(StorageError::InvalidStatus(other.to_string())),
        }
    }
}

/// One row from the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    /// Auto-assigned primary key.
    pub id: i64,
    /// Free-text product label.
    pub product: String,
    /// Canonical mention token of the customer (`<@id>`).
    #[sqlx(rename = "customerInfo")]
    pub customer_info: String,
    /// Normalized member id of the customer; NULL for rows written before the column existed.
    #[sqlx(rename = "customerId")]
    pub customer_id: Option<String>,
    /// Unvalidated free text.
    pub price: String,
    pub note: String,
    /// Absolute deadline, epoch millis.
    #[sqlx(rename = "expireAt")]
    pub expire_at: i64,
    pub status: OrderStatus,
    /// Channel the announcement message was posted to.
    #[sqlx(rename = "channelId")]
    pub channel_id: String,
    /// Announcement message id; NULL until attached.
    #[sqlx(rename = "messageId")]
    pub message_id: Option<String>,
    /// Creation time, epoch millis.
    #[sqlx(rename = "createdAt")]
    pub created_at: i64,
}

impl Order {
    /// Milliseconds left until `expire_at`, relative to `now_ms`. Negative once overdue.
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        self.expire_at - now_ms
    }
}

/// Draft of an order before insertion; the store assigns id and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub product: String,
    pub customer_info: String,
    pub customer_id: Option<String>,
    pub price: String,
    pub note: String,
    pub expire_at: i64,
    pub channel_id: String,
    pub created_at: i64,
}

impl NewOrder {
    /// Materializes the row the store writes for this draft.
    pub fn into_order(self, id: i64) -> Order {
        Order {
            id,
            product: self.product,
            customer_info: self.customer_info,
            customer_id: self.customer_id,
            price: self.price,
            note: self.note,
            expire_at: self.expire_at,
            status: OrderStatus::Pending,
            channel_id: self.channel_id,
            message_id: None,
            created_at: self.created_at,
        }
    }
}
