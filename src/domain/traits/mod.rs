//! Domain traits - Abstractions for infrastructure implementations

pub mod board;

pub use board::MessageBoard;
