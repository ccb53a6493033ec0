//! Adapters - The message board server and the terminal

pub mod console;
pub mod http;

pub use console::ConsoleAdapter;
pub use http::HttpBoard;
