//! Error types for colour parsing, configuration and I/O.

use std::io;

use thiserror::Error;

/// Faults in an ANSI colour specification.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
    #[error("unknown colour `{0}` (expected a name, SGR parameters or #RRGGBB)")]
    Unknown(String),
    #[error("palette needs 5 comma-separated entries, got {0}")]
    PaletteLength(usize),
}

/// Bad flag values, caught before any input is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {which} pattern `{pattern}`: {source}")]
    InvalidPattern {
        which: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("histogram character must not be empty")]
    EmptyGlyph,
    #[error("unknown size `{0}` (expected small, medium, large or full)")]
    UnknownSize(String),
    #[error("unknown numeric mode `{0}` (expected absolute or difference)")]
    UnknownNumericMode(String),
    #[error("unknown graph orientation `{0}` (expected vk or kv)")]
    UnknownOrientation(String),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// A pre-tallied line matching neither `count key` nor `key count`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("input malformed and discarded (perhaps pass --graph={hint}?): {line}")]
pub struct MalformedLine {
    pub line: String,
    /// Orientation flag the line might have been meant for.
    pub hint: &'static str,
}

/// Anything that can end a run early.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
