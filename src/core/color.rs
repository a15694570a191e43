//! Bar colours.  One value renders both as an ANSI true-colour escape for
//! the terminal and as a CSS hex string for Vega-Lite.

use std::fmt;

use thiserror::Error;

use crate::core::constants::BAR_COLOR_HEX;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

/// 24-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// `ESC[0m`
pub const RESET: &str = "\x1b[0m";

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The orange used for histogram bars (`#FBAA6D`).
    #[must_use]
    pub const fn bar() -> Self {
        Self::rgb(0xFB, 0xAA, 0x6D)
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::rgb(0x00, 0x00, 0x00)),
            "red" => Ok(Self::rgb(0xCD, 0x31, 0x31)),
            "green" => Ok(Self::rgb(0x0D, 0xBC, 0x79)),
            "yellow" => Ok(Self::rgb(0xE5, 0xE5, 0x10)),
            "blue" => Ok(Self::rgb(0x24, 0x72, 0xC8)),
            "magenta" => Ok(Self::rgb(0xBC, 0x3F, 0xBC)),
            "cyan" => Ok(Self::rgb(0x11, 0xA8, 0xCD)),
            "white" => Ok(Self::rgb(0xE5, 0xE5, 0xE5)),
            "orange" | "bar" => Ok(Self::bar()),
            _ => Self::from_hex(s),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn ansi(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// CSS form, upper-case like the default `#FBAA6D`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_hex(BAR_COLOR_HEX).unwrap_or_else(|_| Self::bar())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &Color, text: &str) -> String {
    format!("{}{text}{RESET}", c.ansi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_bar_orange() {
        assert_eq!(Color::default(), Color::bar());
        assert_eq!(Color::default().hex(), BAR_COLOR_HEX);
    }

    #[test]
    fn parses_names_and_hex() {
        assert_eq!(Color::from_name("Orange").unwrap(), Color::bar());
        assert_eq!(
            Color::from_name("#6048c1").unwrap(),
            Color::rgb(0x60, 0x48, 0xC1)
        );
        assert!(matches!(
            Color::from_name("#12345"),
            Err(ColorError::InvalidHexLength)
        ));
        assert!(matches!(
            Color::from_hex("zz0000"),
            Err(ColorError::InvalidHexDigit)
        ));
    }

    #[test]
    fn ansi_escape() {
        assert_eq!(Color::rgb(1, 22, 255).ansi(), "\x1b[38;2;1;22;255m");
        assert_eq!(
            colorize(&Color::rgb(0, 0, 0), "x"),
            "\x1b[38;2;0;0;0mx\x1b[0m"
        );
    }
}
