//! Split/match capability used by the tokenizer and the match filter.
//!
//! The classifier only needs these two operations, so anything able to cut
//! text into pieces and test a piece can stand in for a regular expression.

use regex::Regex;

use crate::core::error::ConfigError;

pub trait TextPattern {
    /// Does `text` match, anchored at its start?
    fn matches(&self, text: &str) -> bool;

    /// Pieces of `text` between occurrences of the pattern.
    fn split<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = &'t str> + 't>;
}

impl TextPattern for Regex {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        self.is_match(text)
    }

    fn split<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = &'t str> + 't> {
        Box::new(Regex::split(self, text))
    }
}

/// Expand tokenizer shorthands (`white`, `word`) and compile.
pub fn tokenizer(spec: &str) -> Result<Regex, ConfigError> {
    let pattern = match spec {
        "white" => r"\s+",
        "word" => r"\W",
        other => other,
    };
    compile("tokenize", pattern, pattern)
}

/// Expand match shorthands (`word`, `num`) and compile anchored at the start.
pub fn matcher(spec: &str) -> Result<Regex, ConfigError> {
    let pattern = match spec {
        "word" => r"^[A-Z,a-z]+$",
        "num" | "number" => r"^\d+$",
        other => other,
    };
    compile("match", pattern, &format!("^(?:{pattern})"))
}

fn compile(which: &'static str, shown: &str, source: &str) -> Result<Regex, ConfigError> {
    Regex::new(source).map_err(|source| ConfigError::InvalidPattern {
        which,
        pattern: shown.to_owned(),
        source,
    })
}
