//! Deterministic mapping from text labels to colors.
//!
//! The same label always yields the same color, across builds and across
//! machines. There is no palette and no state: the color is a pure function
//! of the label's text.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ColorParseError;

/// A 24-bit RGB color, rendered as a CSS hex string (`#rrggbb`).
///
/// ## Example
/// ```rust
/// use teinte::color::Color;
///
/// let color = Color::from_label("release-notes");
/// assert_eq!(color.to_string(), "#7b29db");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Hashes a label into a stable color.
    ///
    /// Folds a signed 32-bit accumulator over the label's UTF-16 code units
    /// as `acc = unit + (acc << 5) - acc`, wrapping on overflow. The three
    /// low bytes of the result become the red, green and blue channels, in
    /// that order.
    ///
    /// Iterating code units rather than `char`s is deliberate: it reproduces
    /// the output of the widespread `charCodeAt`-based JavaScript snippet
    /// this function descends from, surrogate pairs included, so colors
    /// survive a migration from client-side decoration unchanged.
    pub fn from_label(label: &str) -> Self {
        let mut acc: i32 = 0;
        for unit in label.encode_utf16() {
            acc = (unit as i32).wrapping_add((acc << 5).wrapping_sub(acc));
        }

        Self {
            r: (acc & 0xff) as u8,
            g: ((acc >> 8) & 0xff) as u8,
            b: ((acc >> 16) & 0xff) as u8,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ColorParseError {
            value: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(malformed)?;

        // Validate before slicing: a byte-length check alone would let a
        // multibyte character slip through and split a char boundary.
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let channel = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| malformed());

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
