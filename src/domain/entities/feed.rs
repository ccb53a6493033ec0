use std::fmt;

/// A message list endpoint: the global feed or one identity's feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    Global,
    Identity(String),
}

impl Feed {
    /// Path segments relative to the server base URL
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Feed::Global => vec!["messages"],
            Feed::Identity(id) => vec!["ids", id.as_str(), "messages"],
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feed::Global => write!(f, "global feed"),
            Feed::Identity(id) => write!(f, "feed of {}", id),
        }
    }
}
