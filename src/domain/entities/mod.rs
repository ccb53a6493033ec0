//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod message;
pub mod feed;
pub mod command;

pub use user::User;
pub use message::Message;
pub use feed::Feed;
pub use command::{Command, USAGE};
