//! Glyph sets a bar can be drawn with.

use crate::core::error::ConfigError;

/// ▏▎▍▌▋▊▉█, eighths of a cell.
pub const PARTIAL_BLOCKS: [&str; 8] = ["▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"];
/// ╸╾━, thirds of a cell.
pub const PARTIAL_LINES: [&str; 3] = ["╸", "╾", "━"];

#[derive(Clone, Debug, PartialEq)]
pub enum GlyphSet {
    /// One glyph per cell. `tip` is always appended once after the body.
    Solid { body: String, tip: String },
    /// Sub-character resolution: `table[i]` covers `(i + 1) / table.len()` of a
    /// cell, the last entry being a full cell.
    Partial { table: &'static [&'static str] },
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::Solid {
            body: "-".into(),
            tip: "-".into(),
        }
    }
}

impl GlyphSet {
    /// Resolve a `--char` value: a preset name or the literal glyph(s).
    ///
    /// When the first character is ASCII, the first two characters are body
    /// then tip (`-o` draws `-----o`). Anything starting with a non-ASCII
    /// character is used whole for both.
    pub fn from_spec(spec: &str) -> Result<Self, ConfigError> {
        let solid = |g: &str| Self::Solid {
            body: g.to_owned(),
            tip: g.to_owned(),
        };
        Ok(match spec {
            "" => return Err(ConfigError::EmptyGlyph),
            "pb" => Self::Partial {
                table: &PARTIAL_BLOCKS,
            },
            "pl" => Self::Partial {
                table: &PARTIAL_LINES,
            },
            "ba" => solid("▬"),
            "bl" => solid("Ξ"),
            "em" => solid("—"),
            "me" => solid("⋯"),
            "di" => solid("♦"),
            "dt" => solid("•"),
            "sq" => solid("□"),
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(body), Some(tip)) if body.is_ascii() => Self::Solid {
                        body: body.to_string(),
                        tip: tip.to_string(),
                    },
                    _ => solid(s),
                }
            }
        })
    }

    /// Fraction of a cell the smallest glyph covers.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        match self {
            Self::Solid { .. } => 1.0,
            #[allow(clippy::cast_precision_loss)]
            Self::Partial { table } => 1.0 / table.len() as f64,
        }
    }

    /// Glyph drawn for each whole cell.
    #[must_use]
    pub fn full(&self) -> &str {
        match self {
            Self::Solid { body, .. } => body,
            Self::Partial { table } => table.last().copied().unwrap_or(" "),
        }
    }
}
