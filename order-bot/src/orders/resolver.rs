//! Member resolver: turns the customer text typed into the creation form into a member.
//!
//! Explicit references (`<@id>`, `<@!id>` or a bare 17–20 digit id) are taken as-is.
//! Names are matched case-insensitively as substrings of username or display name against
//! the local member cache first, then against a bounded remote search.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, instrument};

use crate::core::{MemberDirectory, MemberRef, OrderError, Result};

/// Upper bound on members returned by the remote search.
pub const REMOTE_SEARCH_LIMIT: u64 = 5;

/// Outcome of a name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Member(MemberRef),
    Ambiguous,
    NotFound,
}

/// The customer of a new order, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    /// Canonical mention token (`<@id>`).
    pub mention: String,
}

impl Customer {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            mention: format!("<@{}>", id),
        }
    }
}

fn mention_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<@!?(\d+)>").expect("valid mention regex"))
}

fn bare_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{17,20}$").expect("valid id regex"))
}

/// Member id inside the first mention token of `text`, if any.
pub fn parse_mention_id(text: &str) -> Option<u64> {
    mention_regex()
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Member id if `input` is already an explicit reference.
pub fn parse_literal_reference(input: &str) -> Option<u64> {
    let input = input.trim();
    if let Some(id) = parse_mention_id(input) {
        return Some(id);
    }
    if bare_id_regex().is_match(input) {
        return input.parse().ok();
    }
    None
}

/// Members whose username or display name contains `needle` (already lower-cased).
pub fn match_members<'a>(members: &'a [MemberRef], needle: &str) -> Vec<&'a MemberRef> {
    members
        .iter()
        .filter(|m| {
            m.username.to_lowercase().contains(needle)
                || m.display_name.to_lowercase().contains(needle)
        })
        .collect()
}

fn decide(mut matches: Vec<MemberRef>) -> Option<Resolution> {
    match matches.len() {
        0 => None,
        1 => matches.pop().map(Resolution::Member),
        _ => Some(Resolution::Ambiguous),
    }
}

/// Looks a name up in the cache, then via remote search.
#[instrument(skip(directory))]
pub async fn resolve_member(
    directory: &dyn MemberDirectory,
    guild_id: u64,
    name: &str,
) -> Result<Resolution> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Resolution::NotFound);
    }

    let cached = directory.cached_members(guild_id).await;
    let local: Vec<MemberRef> = match_members(&cached, &needle)
        .into_iter()
        .cloned()
        .collect();
    debug!(cached = cached.len(), matches = local.len(), "Searched member cache");
    if let Some(resolution) = decide(local) {
        return Ok(resolution);
    }

    let remote = directory
        .search_members(guild_id, name.trim(), REMOTE_SEARCH_LIMIT)
        .await?;
    debug!(matches = remote.len(), "Searched members remotely");
    Ok(decide(remote).unwrap_or(Resolution::NotFound))
}

/// Resolves the customer field of the creation form.
///
/// Explicit references short-circuit the lookup. Ambiguous and unknown names are returned as
/// [`OrderError`] so the caller can reject the form.
pub async fn resolve_customer(
    directory: &dyn MemberDirectory,
    guild_id: Option<u64>,
    input: &str,
) -> Result<Customer> {
    if let Some(id) = parse_literal_reference(input) {
        debug!(member_id = id, "Customer given as explicit reference");
        return Ok(Customer::new(id));
    }

    let Some(guild_id) = guild_id else {
        return Err(OrderError::UnknownMember(input.trim().to_string()).into());
    };

    match resolve_member(directory, guild_id, input).await? {
        Resolution::Member(member) => {
            info!(member_id = member.id, username = %member.username, "Resolved customer");
            Ok(Customer::new(member.id))
        }
        Resolution::Ambiguous => Err(OrderError::AmbiguousMember(input.trim().to_string()).into()),
        Resolution::NotFound => Err(OrderError::UnknownMember(input.trim().to_string()).into()),
    }
}
