use super::Feed;
use crate::application::errors::CommandError;

/// Literal token that introduces the recipient of `send`
pub const RECIPIENT_KEYWORD: &str = "to";

/// A fully validated command, ready to run against a message board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ListUsers,
    LookupUser { github_id: String },
    RegisterUser { name: String, github_id: String },
    ListMessages { feed: Feed },
    Send { from: String, text: String, to: Option<String> },
    Watch { feed: Feed },
}

impl Command {
    /// Parse a token list (`verb args...`)
    pub fn from_tokens(tokens: &[String]) -> Result<Self, CommandError> {
        let (verb, args) = tokens.split_first().ok_or(CommandError::NoCommand)?;
        Self::parse(verb, args)
    }

    /// Validate `args` against the shape `verb` expects.
    ///
    /// Nothing here touches the network; a command that fails to parse is
    /// never sent.
    pub fn parse(verb: &str, args: &[String]) -> Result<Self, CommandError> {
        match verb {
            "help" => match args {
                [] => Ok(Command::Help),
                _ => Err(CommandError::argument_count(verb, "0", args.len())),
            },
            "ids" => match args {
                [] => Ok(Command::ListUsers),
                [github_id] => Ok(Command::LookupUser {
                    github_id: github_id.clone(),
                }),
                [name, github_id] => Ok(Command::RegisterUser {
                    name: name.clone(),
                    github_id: github_id.clone(),
                }),
                _ => Err(CommandError::argument_count(verb, "0, 1 or 2", args.len())),
            },
            "messages" => Ok(Command::ListMessages {
                feed: Self::parse_feed(verb, args)?,
            }),
            "watch" => Ok(Command::Watch {
                feed: Self::parse_feed(verb, args)?,
            }),
            "send" => match args {
                [from, text] => Ok(Command::Send {
                    from: from.clone(),
                    text: text.clone(),
                    to: None,
                }),
                [from, text, keyword, to] => {
                    if keyword != RECIPIENT_KEYWORD {
                        return Err(CommandError::MalformedArguments(format!(
                            "expected '{}'; got {}",
                            RECIPIENT_KEYWORD, keyword
                        )));
                    }
                    Ok(Command::Send {
                        from: from.clone(),
                        text: text.clone(),
                        to: Some(to.clone()),
                    })
                }
                _ => Err(CommandError::argument_count(verb, "2 or 4", args.len())),
            },
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    fn parse_feed(verb: &str, args: &[String]) -> Result<Feed, CommandError> {
        match args {
            [] => Ok(Feed::Global),
            [github_id] => Ok(Feed::Identity(github_id.clone())),
            _ => Err(CommandError::argument_count(verb, "0 or 1", args.len())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::ListUsers | Command::LookupUser { .. } | Command::RegisterUser { .. } => "ids",
            Command::ListMessages { .. } => "messages",
            Command::Send { .. } => "send",
            Command::Watch { .. } => "watch",
        }
    }
}

/// Static usage text printed by `help`
pub const USAGE: &str = "\
You may run any of these commands:
   help                          | Show this help.
   ids                           | List the users.
   ids <github-id>               | List the user ID for the given GitHub ID.
   ids <name> <github-id>        | Register the given name for the GitHub ID.
   messages                      | List the most recent messages.
   messages <github-id>          | List the messages for the given GitHub ID.
   send <from> <message>         | Send a message from the given GitHub ID.
   send <from> <message> to <to> | Send a message from the given GitHub ID to the other GitHub ID.
   watch                         | Watch for new messages.
   watch <github-id>             | Watch for new messages for the given GitHub ID.";
