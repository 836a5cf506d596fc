//! Settings for one run and the builder that validates them.
//!
//! Everything is resolved here, once, before the first input line is read.
//! The rest of the crate only ever sees an immutable `&Config`.

use std::str::FromStr;

use log::info;
use regex::Regex;

use crate::{
    core::{
        color::Palette,
        constants::{
            DEFAULT_HEIGHT, DEFAULT_MAX_KEYS, DEFAULT_PRUNE_INTERVAL, DEFAULT_WIDTH, KEY_MARGIN,
        },
        error::ConfigError,
        pattern,
    },
    render::{bar::Scale, glyph::GlyphSet},
};

/// Field order of a pre-tallied line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Orientation {
    /// `<count> <key>`, as printed by `uniq -c` or `du`.
    #[default]
    ValueKey,
    /// `<key> <count>`
    KeyValue,
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "vk" => Ok(Self::ValueKey),
            "kv" => Ok(Self::KeyValue),
            other => Err(ConfigError::UnknownOrientation(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NumericMode {
    /// Graph each value as-is.
    #[default]
    Absolute,
    /// Graph the change from the previous value.
    Difference,
}

impl FromStr for NumericMode {
    type Err = ConfigError;

    /// `absolute`, `actual`, `normal`… pick the first; `diff`, `derivative`,
    /// `increasing`, `monotonic`… pick the second. Only the first letter counts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next().map(|c| c.to_ascii_lowercase()) {
            None | Some('a' | 'n') => Ok(Self::Absolute),
            Some('d' | 'i' | 'm') => Ok(Self::Difference),
            Some(_) => Err(ConfigError::UnknownNumericMode(s.to_owned())),
        }
    }
}

/// How input lines are turned into tallies.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputMode {
    /// Every line (or every token of it) is one occurrence.
    #[default]
    Tokens,
    /// Lines already carry a count.
    PreTallied(Orientation),
    /// Lines are numbers graphed in sequence, without tallying.
    Numeric(NumericMode),
}

/// Immutable parameters handed to the core.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// `None`: the whole trimmed line is one token.
    pub tokenizer: Option<Regex>,
    /// `None`: every non-empty token matches.
    pub matcher: Option<Regex>,
    pub scale: Scale,
    pub glyphs: GlyphSet,
    pub prune_interval: u64,
    pub max_keys: usize,
    pub mode: InputMode,
    pub verbose: bool,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tokenizer: None,
            matcher: None,
            scale: Scale::Linear,
            glyphs: GlyphSet::default(),
            prune_interval: DEFAULT_PRUNE_INTERVAL,
            max_keys: DEFAULT_MAX_KEYS.max(DEFAULT_HEIGHT + KEY_MARGIN),
            mode: InputMode::Tokens,
            verbose: false,
            palette: Palette::plain(),
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder(width: usize, height: usize) -> ConfigBuilder {
        ConfigBuilder::new(width, height)
    }
}

/// Fluent builder; patterns and glyphs are only resolved in `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    width: usize,
    height: usize,
    tokenize: Option<String>,
    matcher: Option<String>,
    scale: Scale,
    glyphs: Option<String>,
    prune_interval: u64,
    max_keys: usize,
    mode: InputMode,
    verbose: bool,
    palette: Palette,
}

impl ConfigBuilder {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tokenize: None,
            matcher: None,
            scale: Scale::Linear,
            glyphs: None,
            prune_interval: DEFAULT_PRUNE_INTERVAL,
            max_keys: DEFAULT_MAX_KEYS,
            mode: InputMode::Tokens,
            verbose: false,
            palette: Palette::plain(),
        }
    }

    /// `white`, `word` or a regular expression to split lines on.
    #[inline]
    #[must_use]
    pub fn tokenize(mut self, spec: impl Into<String>) -> Self {
        self.tokenize = Some(spec.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn tokenize_opt(mut self, spec: Option<&str>) -> Self {
        if let Some(s) = spec {
            self.tokenize = Some(s.to_owned());
        }
        self
    }
    /// `word`, `num` or a regular expression tokens must start with.
    #[inline]
    #[must_use]
    pub fn match_pattern(mut self, spec: impl Into<String>) -> Self {
        self.matcher = Some(spec.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn match_opt(mut self, spec: Option<&str>) -> Self {
        if let Some(s) = spec {
            self.matcher = Some(s.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn scale(mut self, s: Scale) -> Self {
        self.scale = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn logarithmic(self, on: bool) -> Self {
        self.scale(if on { Scale::Logarithmic } else { Scale::Linear })
    }
    /// A glyph preset (`pb`, `dt`, …) or the literal glyph(s).
    #[inline]
    #[must_use]
    pub fn glyphs(mut self, spec: impl Into<String>) -> Self {
        self.glyphs = Some(spec.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn prune_interval(mut self, n: u64) -> Self {
        self.prune_interval = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn max_keys(mut self, n: usize) -> Self {
        self.max_keys = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn mode(mut self, m: InputMode) -> Self {
        self.mode = m;
        self
    }
    #[inline]
    #[must_use]
    pub fn verbose(mut self, v: bool) -> Self {
        self.verbose = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn palette(mut self, p: Palette) -> Self {
        self.palette = p;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Zero("width"));
        }
        if self.height == 0 {
            return Err(ConfigError::Zero("height"));
        }
        if self.prune_interval == 0 {
            return Err(ConfigError::Zero("prune interval"));
        }

        let tokenizer = match self.tokenize.as_deref() {
            None | Some("") => None,
            Some(spec) => Some(pattern::tokenizer(spec)?),
        };
        let matcher = match self.matcher.as_deref() {
            None | Some("" | ".") => None,
            Some(spec) => Some(pattern::matcher(spec)?),
        };
        let glyphs = match self.glyphs.as_deref() {
            None => GlyphSet::default(),
            Some(spec) => GlyphSet::from_spec(spec)?,
        };

        let floor = self.height.saturating_add(KEY_MARGIN);
        let max_keys = if self.max_keys < floor {
            info!("raised max keys to {floor} (height + {KEY_MARGIN})");
            floor
        } else {
            self.max_keys
        };

        Ok(Config {
            width: self.width,
            height: self.height,
            tokenizer,
            matcher,
            scale: self.scale,
            glyphs,
            prune_interval: self.prune_interval,
            max_keys,
            mode: self.mode,
            verbose: self.verbose,
            palette: self.palette,
        })
    }
}

/// Lets a builder chain end in `?` directly.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
