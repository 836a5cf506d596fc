//! Report geometry: named size presets + terminal size plumbing.

use std::str::FromStr;

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{MIN_FULL_HEIGHT, MIN_FULL_WIDTH},
    error::ConfigError,
};

/// `--size` presets. Any prefix of the full name works.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizePreset {
    Small,
    Medium,
    Large,
    Full,
}

impl FromStr for SizePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" | "sm" | "s" => Ok(Self::Small),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "large" | "lg" | "l" => Ok(Self::Large),
            "full" | "fl" | "f" => Ok(Self::Full),
            other => Err(ConfigError::UnknownSize(other.to_owned())),
        }
    }
}

impl SizePreset {
    /// `(width, height)` of the report. `Full` leaves a few rows for the
    /// header and, when `verbose`, for the summary.
    #[must_use]
    pub fn dims(self, verbose: bool) -> (usize, usize) {
        match self {
            Self::Small => (60, 10),
            Self::Medium => (100, 20),
            Self::Large => (140, 35),
            Self::Full => {
                let (Width(w), Height(h)) = terminal_geometry();
                let mut height = usize::from(h).saturating_sub(3);
                if verbose {
                    height = height.saturating_sub(4);
                }
                (
                    usize::from(w).max(MIN_FULL_WIDTH),
                    height.max(MIN_FULL_HEIGHT),
                )
            }
        }
    }
}

/// `(columns, rows)` of the attached terminal, or 80×30 when there is none.
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_and_abbreviations() {
        assert_eq!("s".parse::<SizePreset>().unwrap(), SizePreset::Small);
        assert_eq!("med".parse::<SizePreset>().unwrap(), SizePreset::Medium);
        assert_eq!("large".parse::<SizePreset>().unwrap(), SizePreset::Large);
        assert!("huge".parse::<SizePreset>().is_err());
        assert_eq!(SizePreset::Medium.dims(false), (100, 20));
    }

    #[test]
    fn full_never_below_minimum() {
        let (w, h) = SizePreset::Full.dims(true);
        assert!(w >= MIN_FULL_WIDTH);
        assert!(h >= MIN_FULL_HEIGHT);
    }
}
