//! Recording mocks of the chat transport: `MockBoard` (order messages) and `MockDirectory`
//! (guild members).

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use order_bot::orders::OrderView;
use order_bot::{BotError, MemberDirectory, MemberRef, OrderBoard, Result};

/// One call made against the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCall {
    Posted {
        channel_id: String,
        message_id: String,
        view: OrderView,
    },
    Edited {
        channel_id: String,
        message_id: String,
        view: OrderView,
    },
    Notice {
        channel_id: String,
        text: String,
    },
}

/// Records every post, edit and notice. Message ids are handed out sequentially.
#[derive(Debug, Clone, Default)]
pub struct MockBoard {
    calls: Arc<Mutex<Vec<BoardCall>>>,
    next_message_id: Arc<AtomicUsize>,
    fail_posts: Arc<AtomicBool>,
    fail_edits: Arc<AtomicBool>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `post_order` fail.
    pub fn fail_posts(&self) {
        self.fail_posts.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent `edit_order` fail.
    pub fn fail_edits(&self) {
        self.fail_edits.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<BoardCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<OrderView> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BoardCall::Posted { view, .. } => Some(view),
                _ => None,
            })
            .collect()
    }

    pub fn edits(&self) -> Vec<(String, OrderView)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BoardCall::Edited {
                    message_id, view, ..
                } => Some((message_id, view)),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BoardCall::Notice { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl OrderBoard for MockBoard {
    async fn post_order(&self, channel_id: &str, view: &OrderView) -> Result<String> {
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err(BotError::Platform("Missing Access".to_string()));
        }
        let message_id = format!("{}", 5000 + self.next_message_id.fetch_add(1, Ordering::SeqCst));
        self.calls.lock().unwrap().push(BoardCall::Posted {
            channel_id: channel_id.to_string(),
            message_id: message_id.clone(),
            view: view.clone(),
        });
        Ok(message_id)
    }

    async fn edit_order(&self, channel_id: &str, message_id: &str, view: &OrderView) -> Result<()> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(BotError::Platform("Unknown Message".to_string()));
        }
        self.calls.lock().unwrap().push(BoardCall::Edited {
            channel_id: channel_id.to_string(),
            message_id: message_id.to_string(),
            view: view.clone(),
        });
        Ok(())
    }

    async fn send_notice(&self, channel_id: &str, text: &str) -> Result<()> {
        self.calls.lock().unwrap().push(BoardCall::Notice {
            channel_id: channel_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Fixed member cache plus a fixed remote search result; counts remote searches.
#[derive(Debug, Clone, Default)]
pub struct MockDirectory {
    cached: Vec<MemberRef>,
    remote: Vec<MemberRef>,
    search_call_count: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

impl MockDirectory {
    pub fn new(cached: Vec<MemberRef>, remote: Vec<MemberRef>) -> Self {
        Self {
            cached,
            remote,
            ..Self::default()
        }
    }

    pub fn get_search_call_count(&self) -> usize {
        self.search_call_count.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemberDirectory for MockDirectory {
    async fn cached_members(&self, _guild_id: u64) -> Vec<MemberRef> {
        self.cached.clone()
    }

    async fn search_members(
        &self,
        _guild_id: u64,
        query: &str,
        limit: u64,
    ) -> Result<Vec<MemberRef>> {
        self.search_call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());
        Ok(self.remote.iter().take(limit as usize).cloned().collect())
    }
}

pub fn member(id: u64, username: &str, display_name: &str) -> MemberRef {
    MemberRef {
        id,
        username: username.to_string(),
        display_name: display_name.to_string(),
    }
}
