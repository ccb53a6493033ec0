use serde::{Deserialize, Serialize};
use std::fmt;

/// UserID sent on registration; the server assigns the real one
pub const UNASSIGNED_USER_ID: &str = "-";

/// A registered identity on the message board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID", default)]
    pub user_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "GitHubID", default)]
    pub github_id: String,
}

impl User {
    /// Build a registration request binding `name` to `github_id`
    pub fn registration(name: impl Into<String>, github_id: impl Into<String>) -> Self {
        Self {
            user_id: UNASSIGNED_USER_ID.to_string(),
            name: name.into(),
            github_id: github_id.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User: {}: {} ({})", self.user_id, self.github_id, self.name)
    }
}
