//! Console adapter for the interactive prompt

use dialoguer::theme::Theme;
use dialoguer::Input;
use std::fmt;
use std::io::{self, BufRead, IsTerminal};

/// Prompt shown before each interactive line
pub const PROMPT: &str = ">";

/// Renders the prompt as `> ` instead of dialoguer's `prompt: `
struct PromptTheme;

impl Theme for PromptTheme {
    fn format_input_prompt(&self, f: &mut dyn fmt::Write, prompt: &str, _default: Option<&str>) -> fmt::Result {
        write!(f, "{} ", prompt)
    }

    fn format_input_prompt_selection(&self, f: &mut dyn fmt::Write, prompt: &str, sel: &str) -> fmt::Result {
        write!(f, "{} {}", prompt, sel)
    }
}

/// Reads command lines from the terminal
pub struct ConsoleAdapter {
    prompt: String,
    line_editing: bool,
}

impl ConsoleAdapter {
    /// Use the line editor when stdin is a terminal, plain reads otherwise
    pub fn new() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            line_editing: io::stdin().is_terminal(),
        }
    }

    /// Read the next line, or `None` once input is exhausted
    pub fn read_line(&self) -> io::Result<Option<String>> {
        if self.line_editing {
            let line: String = Input::with_theme(&PromptTheme)
                .with_prompt(&self.prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(Some(line));
        }

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}
