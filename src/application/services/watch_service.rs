use std::io::Write;
use std::time::Duration;

use crate::application::errors::CliError;
use crate::domain::entities::{Feed, Message};
use crate::domain::traits::MessageBoard;

/// Default pause between polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Remembers the newest sequence seen on a feed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WatchCursor {
    most_recent_sequence: Option<String>,
}

impl WatchCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn most_recent_sequence(&self) -> Option<&str> {
        self.most_recent_sequence.as_deref()
    }

    /// Take one newest-first poll result and return the messages not shown yet.
    ///
    /// The first non-empty poll only primes the cursor. If the cursor is no
    /// longer in the window, every message in the window is returned. A newest
    /// message without a sequence leaves the cursor unset, so the next poll
    /// primes it again.
    pub fn advance(&mut self, feed: &[Message]) -> Vec<Message> {
        let Some(newest) = feed.first() else {
            return Vec::new();
        };

        let fresh = match &self.most_recent_sequence {
            None => Vec::new(),
            Some(cursor) => {
                let fresh: Vec<Message> = feed
                    .iter()
                    .take_while(|m| &m.sequence != cursor)
                    .cloned()
                    .collect();
                if fresh.len() == feed.len() {
                    tracing::warn!(
                        "Last seen sequence {} is no longer in the feed; showing all {} messages",
                        cursor,
                        feed.len()
                    );
                }
                fresh
            }
        };

        self.most_recent_sequence = Some(newest.sequence.clone()).filter(|s| !s.is_empty());
        fresh
    }
}

/// Polls a feed and prints messages as they appear
pub struct WatchService<'a, B: MessageBoard> {
    board: &'a B,
    interval: Duration,
}

impl<'a, B: MessageBoard> WatchService<'a, B> {
    pub fn new(board: &'a B, interval: Duration) -> Self {
        Self { board, interval }
    }

    /// Watch `feed` until the board returns an error.
    ///
    /// There is no retry: the first failed poll ends the watch and is
    /// returned to the caller.
    pub async fn run(&self, feed: &Feed, out: &mut dyn Write) -> Result<(), CliError> {
        tracing::info!("Watching {} every {:?}", feed, self.interval);
        let mut cursor = WatchCursor::new();

        loop {
            let messages = self.board.list_messages(feed).await?;
            let fresh = cursor.advance(&messages);
            if !fresh.is_empty() {
                tracing::debug!(
                    "{} new messages on {}, cursor now {:?}",
                    fresh.len(),
                    feed,
                    cursor.most_recent_sequence()
                );
            }
            for message in &fresh {
                writeln!(out, "{}", message)?;
            }
            out.flush()?;

            tokio::time::sleep(self.interval).await;
        }
    }
}
