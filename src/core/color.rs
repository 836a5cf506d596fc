//! Zero-alloc ANSI colour codes and the five-slot report palette.
//!
//! The core never interprets these; they are written around columns as-is.

use std::{fmt, str};

use crate::core::{constants::DEFAULT_PALETTE, error::ColorError};

/// Longest escape sequence we keep inline: `ESC [ params m`.
const INLINE_CAP: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; INLINE_CAP], len: u8 },
}

impl Default for AnsiCode {
    fn default() -> Self {
        Self::none()
    }
}

impl AnsiCode {
    /// Emits nothing at all.
    pub const fn none() -> Self {
        Self::Static("")
    }
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// Select Graphic Rendition escape `ESC[<params>m`, e.g. `32` or `1;33`.
    pub fn sgr(params: &str) -> Result<Self, ColorError> {
        let p = params.as_bytes();
        if p.is_empty()
            || p.len() > INLINE_CAP - 3
            || !p.iter().all(|b| b.is_ascii_digit() || *b == b';')
        {
            return Err(ColorError::Unknown(params.to_owned()));
        }
        let mut buf = [0u8; INLINE_CAP];
        buf[..2].copy_from_slice(b"\x1b[");
        buf[2..2 + p.len()].copy_from_slice(p);
        buf[2 + p.len()] = b'm';
        #[allow(clippy::cast_possible_truncation)]
        let len = (p.len() + 3) as u8;
        Ok(Self::Inline { buf, len })
    }

    /// 24-bit foreground, `ESC[38;2;R;G;Bm`.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; INLINE_CAP];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        #[allow(clippy::cast_possible_truncation)]
        let len = len as u8;
        Self::Inline { buf, len }
    }

    /// Parse a colour name, raw SGR parameters or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::none()),
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            "reset" => Ok(Self::reset()),
            _ if s.starts_with('#') => Self::from_hex(s),
            _ => Self::sgr(s),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Palette ---

/// Colours written around the report columns.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Palette {
    pub regular: AnsiCode,
    pub key: AnsiCode,
    pub count: AnsiCode,
    pub percent: AnsiCode,
    pub graph: AnsiCode,
}

impl Palette {
    /// No escape codes anywhere.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            regular: AnsiCode::none(),
            key: AnsiCode::none(),
            count: AnsiCode::none(),
            percent: AnsiCode::none(),
            graph: AnsiCode::none(),
        }
    }

    /// `0,0,32,35,34`
    pub fn default_colors() -> Result<Self, ColorError> {
        Self::parse(DEFAULT_PALETTE)
    }

    /// Comma-separated `regular,key,count,percent,graph`.
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let codes = spec
            .split(',')
            .map(AnsiCode::from_name)
            .collect::<Result<Vec<_>, _>>()?;
        match codes[..] {
            [regular, key, count, percent, graph] => Ok(Self {
                regular,
                key,
                count,
                percent,
                graph,
            }),
            _ => Err(ColorError::PaletteLength(codes.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_wraps_parameters() {
        assert_eq!(AnsiCode::sgr("1;33").unwrap().as_str(), "\x1b[1;33m");
        assert!(AnsiCode::sgr("bold").is_err());
        assert!(AnsiCode::sgr("").is_err());
    }

    #[test]
    fn rgb_and_hex_agree() {
        let hex = AnsiCode::from_hex("#d2870a").unwrap();
        assert_eq!(hex, AnsiCode::rgb(210, 135, 10));
        assert_eq!(hex.as_str(), "\x1b[38;2;210;135;10m");
    }

    #[test]
    fn default_palette_has_five_slots() {
        let p = Palette::default_colors().unwrap();
        assert_eq!(p.regular.as_str(), "\x1b[0m");
        assert_eq!(p.count.as_str(), "\x1b[32m");
        assert_eq!(p.percent.as_str(), "\x1b[35m");
        assert_eq!(p.graph.as_str(), "\x1b[34m");
    }

    #[test]
    fn palette_rejects_wrong_length() {
        assert!(matches!(
            Palette::parse("31,32"),
            Err(ColorError::PaletteLength(2))
        ));
    }

    #[test]
    fn palette_accepts_names() {
        let p = Palette::parse("none,red,green,#000000,blue").unwrap();
        assert_eq!(p.regular.as_str(), "");
        assert_eq!(p.key, AnsiCode::red());
    }
}
