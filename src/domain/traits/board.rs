use async_trait::async_trait;
use crate::domain::entities::{Feed, Message, User};
use crate::application::errors::TransportError;

/// MessageBoard trait - abstraction over the remote message board service
#[async_trait]
pub trait MessageBoard: Send + Sync {
    /// List every registered user
    async fn list_users(&self) -> Result<Vec<User>, TransportError>;

    /// Resolve a GitHub ID to its server-assigned UserID
    async fn lookup_user_id(&self, github_id: &str) -> Result<String, TransportError>;

    /// Register a new user; the server assigns the UserID
    async fn register_user(&self, user: &User) -> Result<(), TransportError>;

    /// Fetch a feed, newest first
    async fn list_messages(&self, feed: &Feed) -> Result<Vec<Message>, TransportError>;

    /// Post a message on behalf of its sender and return the server's echo
    async fn post_message(&self, message: &Message) -> Result<Message, TransportError>;
}
