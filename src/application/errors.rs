//! Application layer errors

use thiserror::Error;

/// Top-level error for one command invocation
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(#[source] std::io::Error),
}

impl CliError {
    /// Short label printed as `Error: [<kind>] <message>`
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Command(e) => e.kind(),
            CliError::Transport(e) => e.kind(),
            CliError::Config(_) => "ConfigError",
            CliError::Output(_) => "OutputError",
            CliError::Runtime(_) => "RuntimeError",
        }
    }
}

/// Local command validation errors, raised before the server is contacted
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("no command specified")]
    NoCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{verb}: expected {expected} args; got {actual}")]
    ArgumentCount {
        verb: String,
        expected: &'static str,
        actual: usize,
    },

    #[error("malformed arguments: {0}")]
    MalformedArguments(String),
}

impl CommandError {
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::NoCommand | CommandError::UnknownCommand(_) => "UnknownCommand",
            CommandError::ArgumentCount { .. } => "ArgumentCount",
            CommandError::MalformedArguments(_) => "MalformedArguments",
        }
    }

    pub(crate) fn argument_count(verb: &str, expected: &'static str, actual: usize) -> Self {
        CommandError::ArgumentCount {
            verb: verb.to_string(),
            expected,
            actual,
        }
    }
}

/// Errors talking to the message board server
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("http status: {0}")]
    Status(u16),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl TransportError {
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::InvalidUrl(_) => "InvalidUrl",
            TransportError::Network(_) => "NetworkError",
            TransportError::Status(_) => "HttpStatus",
            TransportError::Encode(_) => "EncodeError",
            TransportError::Decode(_) => "DecodeError",
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_message_names_counts() {
        let err = CommandError::argument_count("messages", "0 or 1", 3);
        assert_eq!(err.to_string(), "messages: expected 0 or 1 args; got 3");
        assert_eq!(err.kind(), "ArgumentCount");
    }

    #[test]
    fn test_cli_error_kind_delegates() {
        let err: CliError = CommandError::UnknownCommand("frobnicate".to_string()).into();
        assert_eq!(err.kind(), "UnknownCommand");
        assert_eq!(err.to_string(), "unknown command: frobnicate");

        let err: CliError = TransportError::Status(404).into();
        assert_eq!(err.kind(), "HttpStatus");
        assert_eq!(err.to_string(), "http status: 404");
    }
}
