//! RGBA colour values and CSS hex parsing.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

/// Error returned when a colour string is not `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("colour must start with '#': {0:?}")]
    MissingHash(String),
    #[error("colour must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in colour: {0:?}")]
    BadDigit(String),
}

/// An 8-bit-per-channel colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::opaque(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Compare colour channels only; alpha is ignored.
    #[must_use]
    pub fn same_rgb(self, other: Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Parse `#rrggbb` or the short `#rgb` form. The result is opaque.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing the first problem found.
    pub fn parse_hex(text: &str) -> Result<Self, ColorError> {
        let Some(digits) = text.trim().strip_prefix('#') else {
            return Err(ColorError::MissingHash(text.to_owned()));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(text.to_owned()));
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::BadDigit(text.to_owned()));
        match digits.len() {
            6 => Ok(Self::opaque(channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 0x11);
                Ok(Self::opaque(short(&digits[0..1])?, short(&digits[1..2])?, short(&digits[2..3])?))
            }
            _ => Err(ColorError::BadLength(text.to_owned())),
        }
    }

    /// Lowercase `#rrggbb` form, as sent on the wire.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
