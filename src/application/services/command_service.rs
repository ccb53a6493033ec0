use std::io::Write;
use std::time::Duration;

use crate::application::errors::CliError;
use crate::application::services::WatchService;
use crate::domain::entities::{Command, Message, User, USAGE};
use crate::domain::traits::MessageBoard;

/// Runs validated commands against a message board
pub struct CommandService<B: MessageBoard> {
    board: B,
    poll_interval: Duration,
}

impl<B: MessageBoard> CommandService<B> {
    pub fn new(board: B, poll_interval: Duration) -> Self {
        Self {
            board,
            poll_interval,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    /// Execute one command, writing its output to `out`
    pub async fn execute(&self, command: Command, out: &mut dyn Write) -> Result<(), CliError> {
        match command {
            Command::Help => {
                writeln!(out, "{}", USAGE)?;
            }
            Command::ListUsers => {
                for user in self.board.list_users().await? {
                    writeln!(out, "{}", user)?;
                }
            }
            Command::LookupUser { github_id } => {
                let user_id = self.board.lookup_user_id(&github_id).await?;
                writeln!(out, "ID: {}", user_id)?;
            }
            Command::RegisterUser { name, github_id } => {
                self.board
                    .register_user(&User::registration(name, github_id.as_str()))
                    .await?;
                tracing::info!("Registered {}", github_id);
            }
            Command::ListMessages { feed } => {
                for message in self.board.list_messages(&feed).await? {
                    writeln!(out, "{}", message)?;
                }
            }
            Command::Send { from, text, to } => {
                let outgoing = Message::outgoing(from, text, to);
                let echoed = self.board.post_message(&outgoing).await?;
                writeln!(out, "{}", echoed)?;
            }
            Command::Watch { feed } => {
                WatchService::new(&self.board, self.poll_interval)
                    .run(&feed, out)
                    .await?;
            }
        }
        Ok(())
    }
}
