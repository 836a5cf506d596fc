//! Line → tally events for the tokenizing and pre-tallied modes.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::{
    config::{Config, InputMode, NumericMode, Orientation},
    error::MalformedLine,
    pattern::TextPattern,
    tally::TallyStore,
};

static VALUE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)\s+(.+)$").expect("static pattern"));
static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+([0-9]+)$").expect("static pattern"));

/// Running totals over one run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// Tokens (or lines) looked at.
    pub examined: u64,
    /// Tokens that passed the filter; for pre-tallied input, the sum of counts.
    pub matched: u64,
    /// Malformed pre-tallied lines that were dropped.
    pub skipped: u64,
}

/// The input modes that feed a tally. Numeric input never does.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TallyMode {
    Tokens,
    PreTallied(Orientation),
}

impl TryFrom<InputMode> for TallyMode {
    /// Numeric input is handed back for `NumericSeries`.
    type Error = NumericMode;

    fn try_from(mode: InputMode) -> Result<Self, Self::Error> {
        match mode {
            InputMode::Tokens => Ok(Self::Tokens),
            InputMode::PreTallied(o) => Ok(Self::PreTallied(o)),
            InputMode::Numeric(m) => Err(m),
        }
    }
}

/// Split `line` into `(key, count)` for the given orientation.
#[must_use]
pub fn parse_pretallied(line: &str, orientation: Orientation) -> Option<(&str, u64)> {
    let (re, key, count) = match orientation {
        Orientation::ValueKey => (&*VALUE_KEY, 2, 1),
        Orientation::KeyValue => (&*KEY_VALUE, 1, 2),
    };
    let caps = re.captures(line)?;
    let n = caps.get(count)?.as_str().parse().ok()?;
    Some((caps.get(key)?.as_str(), n))
}

pub struct Classifier<'c> {
    cfg: &'c Config,
    mode: TallyMode,
    totals: Totals,
}

impl<'c> Classifier<'c> {
    /// `mode` overrides `cfg.mode`; tokenizer and matcher still come from `cfg`.
    #[must_use]
    pub fn new(cfg: &'c Config, mode: TallyMode) -> Self {
        Self {
            cfg,
            mode,
            totals: Totals::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Feed one input line (without its terminator).
    ///
    /// A malformed pre-tallied line is counted as skipped and handed back so
    /// the caller can report it; it is never fatal.
    pub fn feed(&mut self, line: &str, store: &mut TallyStore) -> Result<(), MalformedLine> {
        match self.mode {
            TallyMode::PreTallied(o) => self.feed_pretallied(line, o, store),
            TallyMode::Tokens => {
                self.feed_tokens(line, store);
                Ok(())
            }
        }
    }

    fn feed_tokens(&mut self, line: &str, store: &mut TallyStore) {
        match &self.cfg.tokenizer {
            Some(t) => {
                for token in TextPattern::split(t, line) {
                    self.observe(token.trim(), store);
                }
            }
            None => self.observe(line.trim(), store),
        }
    }

    fn observe(&mut self, token: &str, store: &mut TallyStore) {
        self.totals.examined += 1;
        if token.is_empty() {
            return;
        }
        if let Some(m) = &self.cfg.matcher {
            if !m.matches(token) {
                return;
            }
        }
        self.totals.matched += 1;
        store.increment(token);
    }

    fn feed_pretallied(
        &mut self,
        line: &str,
        o: Orientation,
        store: &mut TallyStore,
    ) -> Result<(), MalformedLine> {
        let Some((key, count)) = parse_pretallied(line, o) else {
            self.totals.skipped += 1;
            let hint = match o {
                Orientation::ValueKey => "kv",
                Orientation::KeyValue => "vk",
            };
            return Err(MalformedLine {
                line: line.to_owned(),
                hint,
            });
        };
        self.totals.examined += 1;
        self.totals.matched = self.totals.matched.saturating_add(count);
        store.increment_by(key, count);
        Ok(())
    }
}
