//! Command filter: which catalog entries match the palette query.
//!
//! Results keep catalog order. A containment hit and a typo-tolerant hit rank
//! the same.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::catalog::Command;
use crate::matching::Matcher;

/// Commands matching `query`, in catalog order. A blank query matches all.
pub fn filter_commands<'a>(
    query: &str,
    commands: &'a [Command],
    matcher: &Matcher,
) -> Vec<&'a Command> {
    filter_indices(query, commands, matcher)
        .into_iter()
        .map(|i| &commands[i])
        .collect()
}

/// Same as [`filter_commands`], as indices into `commands`.
pub fn filter_indices(query: &str, commands: &[Command], matcher: &Matcher) -> Vec<usize> {
    scan(query, commands, matcher, || false).unwrap_or_default()
}

/// [`filter_commands`] that gives up once `ticket` is superseded.
pub fn filter_commands_cancellable<'a>(
    query: &str,
    commands: &'a [Command],
    matcher: &Matcher,
    ticket: &FilterTicket,
) -> Option<Vec<&'a Command>> {
    let hits = filter_indices_cancellable(query, commands, matcher, ticket)?;
    Some(hits.into_iter().map(|i| &commands[i]).collect())
}

pub fn filter_indices_cancellable(
    query: &str,
    commands: &[Command],
    matcher: &Matcher,
    ticket: &FilterTicket,
) -> Option<Vec<usize>> {
    scan(query, commands, matcher, || ticket.is_stale())
}

fn scan(
    query: &str,
    commands: &[Command],
    matcher: &Matcher,
    is_stale: impl Fn() -> bool,
) -> Option<Vec<usize>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return (!is_stale()).then(|| (0..commands.len()).collect());
    }

    let mut hits = Vec::new();
    for (i, command) in commands.iter().enumerate() {
        if is_stale() {
            return None;
        }
        if command_matches(&query, command, matcher) {
            hits.push(i);
        }
    }
    Some(hits)
}

/// `query` is already trimmed and lower-cased.
fn command_matches(query: &str, command: &Command, matcher: &Matcher) -> bool {
    let title = command.title.to_lowercase();
    let description = command.description.to_lowercase();
    let keywords: Vec<String> = command.keywords.iter().map(|k| k.to_lowercase()).collect();

    title.contains(query)
        || description.contains(query)
        || keywords.iter().any(|k| k.contains(query))
        || matcher.is_close(query, &title)
        || matcher.is_close(query, &description)
        || keywords.iter().any(|k| matcher.is_close(query, k))
}

/// Shared counter that invalidates in-flight filter calls when the query
/// changes.
#[derive(Clone, Debug, Default)]
pub struct FilterGeneration {
    current: Arc<AtomicU64>,
}

impl FilterGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede every outstanding ticket.
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }

    pub fn ticket(&self) -> FilterTicket {
        FilterTicket {
            generation: self.current(),
            current: Arc::clone(&self.current),
        }
    }
}

/// Snapshot of a [`FilterGeneration`].
#[derive(Clone, Debug)]
pub struct FilterTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl FilterTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stale(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.generation
    }
}
