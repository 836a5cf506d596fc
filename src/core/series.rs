//! Numeric mode: one value per line, kept in full and graphed in order.

use std::borrow::Cow;

use crate::core::config::NumericMode;

/// Parse a trimmed float; the Unicode minus sign (U+2212) is accepted.
/// Non-finite values count as unparsable.
#[must_use]
pub fn parse_value(line: &str) -> Option<f64> {
    let t = line.trim();
    let t = if t.contains('\u{2212}') {
        Cow::Owned(t.replace('\u{2212}', "-"))
    } else {
        Cow::Borrowed(t)
    };
    lexical_core::parse::<f64>(t.as_bytes())
        .ok()
        .filter(|v| v.is_finite())
}

#[derive(Debug, Default)]
pub struct NumericSeries {
    mode: NumericMode,
    last: f64,
    seen: u64,
    values: Vec<f64>,
}

impl NumericSeries {
    #[must_use]
    pub fn new(mode: NumericMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Unparsable lines repeat the previous value (0 before the first one).
    pub fn push_line(&mut self, line: &str) {
        let v = parse_value(line).unwrap_or(self.last);
        match self.mode {
            NumericMode::Absolute => self.values.push(v),
            NumericMode::Difference if self.seen > 0 => self.values.push(v - self.last),
            NumericMode::Difference => {}
        }
        self.last = v;
        self.seen += 1;
    }

    /// Lines consumed, parsable or not.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.seen
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
