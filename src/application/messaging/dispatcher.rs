//! Command dispatcher - Routes a verb and its arguments to a handler

use std::io::Write;

use super::parser::LineParser;
use crate::application::errors::CliError;
use crate::application::services::CommandService;
use crate::domain::entities::Command;
use crate::domain::traits::MessageBoard;

/// Outcome of feeding one interactive line to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line held a command and it ran
    Handled,
    /// Blank line, nothing to do
    Skipped,
    /// The user asked to leave the interactive loop
    Exit,
}

/// Keyword that ends an interactive session
pub const EXIT_KEYWORD: &str = "exit";

/// Parses tokens into commands and hands them to the command service
pub struct CommandDispatcher<B: MessageBoard> {
    parser: LineParser,
    service: CommandService<B>,
}

impl<B: MessageBoard> CommandDispatcher<B> {
    pub fn new(service: CommandService<B>) -> Self {
        Self {
            parser: LineParser::new(),
            service,
        }
    }

    pub fn service(&self) -> &CommandService<B> {
        &self.service
    }

    /// Dispatch an already-tokenized command (`verb args...`).
    ///
    /// Argument validation happens before any request is made.
    pub async fn dispatch(&self, tokens: &[String], out: &mut dyn Write) -> Result<(), CliError> {
        let command = Command::from_tokens(tokens)?;
        tracing::debug!("Dispatching {}: {:?}", command.name(), command);
        self.service.execute(command, out).await
    }

    /// Tokenize and dispatch one line of interactive input
    pub async fn dispatch_line(&self, line: &str, out: &mut dyn Write) -> Result<LineOutcome, CliError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LineOutcome::Skipped);
        }
        if line == EXIT_KEYWORD {
            return Ok(LineOutcome::Exit);
        }

        let tokens = self.parser.tokenize(line);
        tracing::debug!("[Tokens: {:?}]", tokens);
        self.dispatch(&tokens, out).await?;
        Ok(LineOutcome::Handled)
    }
}
