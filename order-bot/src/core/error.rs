//! Error types for the order bot.
//!
//! [`BotError`] is the top-level error; [`OrderError`] carries the rejections that are
//! reported back to the interacting member as an ephemeral reply.

use storage::{OrderStatus, StorageError};
use thiserror::Error;

/// Top-level error (storage, chat platform, order rejection).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Order-level rejections. Apart from `AnnouncementFailed`, which closes the order it could
/// not post, none of them change stored state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Order {0} not found")]
    NotFound(i64),

    #[error("Member {actor_id} is not the customer of order {order_id}")]
    NotCustomer { order_id: i64, actor_id: u64 },

    #[error("Order {id} is already {status}")]
    AlreadyClosed { id: i64, status: OrderStatus },

    #[error("Invalid expiration hours: {0:?}")]
    InvalidHours(String),

    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    #[error("More than one member matches {0:?}")]
    AmbiguousMember(String),

    #[error("No member matches {0:?}")]
    UnknownMember(String),

    #[error("Order {0} could not be announced")]
    AnnouncementFailed(i64),
}

impl OrderError {
    /// Text shown to the member in an ephemeral reply.
    pub fn user_message(&self) -> String {
        match self {
            OrderError::NotFound(_) => "❌ Order not found.".to_string(),
            OrderError::NotCustomer { .. } => {
                "⚠️ You are not the customer of this order.".to_string()
            }
            OrderError::AlreadyClosed { status, .. } => {
                format!("⚠️ This order is already {}.", status)
            }
            OrderError::InvalidHours(raw) => format!(
                "⚠️ \"{}\" is not a valid number of hours. Enter a positive number, e.g. 1 or 1.5.",
                raw
            ),
            OrderError::MissingField(field) => format!("⚠️ The field \"{}\" is required.", field),
            OrderError::AmbiguousMember(_) => {
                "⚠️ More than one member matches that name! Please be more specific.".to_string()
            }
            OrderError::UnknownMember(_) => "❌ No member found with that name.".to_string(),
            OrderError::AnnouncementFailed(_) => {
                "❌ Could not post the order to the order channel. Please try again.".to_string()
            }
        }
    }
}

/// Result type for bot operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
