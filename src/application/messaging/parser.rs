//! Line parser - Splits an interactive line into command tokens

use regex_lite::Regex;

/// Unquoted run, double-quoted span, or single-quoted span
const TOKEN_PATTERN: &str = r#"[^\s"']+|"([^"]*)"|'([^']*)'"#;

/// Quote-aware tokenizer for interactive input
pub struct LineParser {
    pattern: Regex,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is valid"),
        }
    }

    /// Split a line into tokens.
    ///
    /// Quoted spans become one token with the quotes stripped and inner
    /// whitespace kept. An unmatched quote character is skipped.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| {
                caps.get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str().to_string())
            })
            .collect()
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
