//! Application services - Business logic orchestration

pub mod command_service;
pub mod watch_service;

pub use command_service::CommandService;
pub use watch_service::{WatchService, DEFAULT_POLL_INTERVAL};
