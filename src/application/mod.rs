//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Command execution and feed watching
//! - Errors: Domain-specific errors
//! - Messaging: Line tokenizing and command dispatching

pub mod errors;
pub mod services;
pub mod messaging;
