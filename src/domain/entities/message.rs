use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered in place of an empty recipient
pub const BROADCAST_MARKER: &str = "*";

/// A message on a feed, as exchanged with the server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
    /// Server-assigned ordering token; empty on outgoing messages
    #[serde(rename = "Sequence", default, skip_serializing_if = "String::is_empty")]
    pub sequence: String,
    #[serde(rename = "FromID", default)]
    pub from_id: String,
    /// Empty means broadcast
    #[serde(rename = "ToID", default, skip_serializing_if = "String::is_empty")]
    pub to_id: String,
    #[serde(rename = "Message", default)]
    pub message: String,
}

impl Message {
    /// Build an outgoing message stamped with the current local time.
    ///
    /// The server rejects messages without a timestamp, so one is always set.
    pub fn outgoing(from_id: impl Into<String>, text: impl Into<String>, to_id: Option<String>) -> Self {
        Self {
            timestamp: now_timestamp(),
            sequence: String::new(),
            from_id: from_id.into(),
            to_id: to_id.unwrap_or_default(),
            message: text.into(),
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.to_id.is_empty()
    }

    pub fn recipient(&self) -> &str {
        if self.is_broadcast() {
            BROADCAST_MARKER
        } else {
            &self.to_id
        }
    }
}

/// RFC 3339 wall-clock time with the local offset, second precision
pub fn now_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message: {} {} {} -> {}: {}",
            self.timestamp,
            self.sequence,
            self.from_id,
            self.recipient(),
            self.message
        )
    }
}
