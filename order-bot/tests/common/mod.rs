//! Shared test harness: mock store and transport, plus an `AppContext` wired to them.

#![allow(dead_code)]

pub mod mock_discord;
pub mod mock_order_store;

use std::sync::Arc;

use order_bot::{AppContext, MemberRef};

pub use mock_discord::{member, BoardCall, MockBoard, MockDirectory};
pub use mock_order_store::{pending_order, MockOrderStore};

pub const ORDER_CHANNEL: &str = "1447582955307532288";
pub const GUILD: u64 = 952778721474002997;

/// Context over fresh mocks; the returned handles observe the same state as the context.
pub struct Harness {
    pub ctx: AppContext,
    pub store: MockOrderStore,
    pub board: MockBoard,
    pub directory: MockDirectory,
}

impl Harness {
    pub fn new(cached: Vec<MemberRef>, remote: Vec<MemberRef>) -> Self {
        let store = MockOrderStore::new();
        let board = MockBoard::new();
        let directory = MockDirectory::new(cached, remote);
        let ctx = AppContext::new(
            Arc::new(store.clone()),
            Arc::new(board.clone()),
            Arc::new(directory.clone()),
            ORDER_CHANNEL,
        );
        Self {
            ctx,
            store,
            board,
            directory,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
