//! Member identity types.

use serde::{Deserialize, Serialize};

/// A guild member as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub id: u64,
    pub username: String,
    /// Nickname or global name, falling back to the username.
    pub display_name: String,
}

/// The member behind an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u64,
    pub username: String,
}
