//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (User, Message, Feed, Command)
//! - Traits: Abstractions for infrastructure (MessageBoard)

pub mod entities;
pub mod traits;
