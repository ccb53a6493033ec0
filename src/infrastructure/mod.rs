//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: The HTTP message board client and the console prompt

pub mod config;
pub mod adapters;
