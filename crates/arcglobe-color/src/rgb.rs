//! [`Rgb`] triples and hex string parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned when a color string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is neither `#rrggbb` nor `#rgb` (leading `#` optional).
    #[error("invalid hex color {0:?}")]
    InvalidFormat(String),
}

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).ok_or_else(|| ColorError::InvalidFormat(s.to_string()))
    }
}

/// Parse a hex color string into an [`Rgb`] triple.
///
/// Accepts `rrggbb` and the `rgb` shorthand, each with an optional single
/// leading `#`, in any letter case. Shorthand digits are doubled, so `#abc`
/// reads as `#aabbcc`. Returns `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let bytes = digits.as_bytes();
    if !bytes.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = nibble(bytes[0])? << 4 | nibble(bytes[1])?;
            let g = nibble(bytes[2])? << 4 | nibble(bytes[3])?;
            let b = nibble(bytes[4])? << 4 | nibble(bytes[5])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_matches_full_form() {
        let short = hex_to_rgb("#fff");
        let full = hex_to_rgb("#ffffff");
        assert_eq!(short, full);
        assert_eq!(short, Some(Rgb::WHITE));
    }

    #[test]
    fn test_shorthand_doubles_each_digit() {
        assert_eq!(hex_to_rgb("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(hex_to_rgb("#1d072e"), Some(Rgb::new(0x1d, 0x07, 0x2e)));
    }

    #[test]
    fn test_leading_hash_is_optional() {
        assert_eq!(hex_to_rgb("ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("0f0"), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(hex_to_rgb("#AbCdEf"), hex_to_rgb("#abcdef"));
        assert_eq!(hex_to_rgb("#ABC"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(hex_to_rgb("not-a-color"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#"), None);
        assert_eq!(hex_to_rgb("#ffff"), None);
        assert_eq!(hex_to_rgb("#fffffff"), None);
        assert_eq!(hex_to_rgb("##fff"), None);
        assert_eq!(hex_to_rgb("#ggg"), None);
        assert_eq!(hex_to_rgb(" #fff"), None);
        assert_eq!(hex_to_rgb("rgba(255,255,255,0.7)"), None);
    }

    #[test]
    fn test_rejects_non_ascii_without_panicking() {
        assert_eq!(hex_to_rgb("#ffé"), None);
        assert_eq!(hex_to_rgb("ффф"), None);
    }

    #[test]
    fn test_from_str_reports_input() {
        let err = "#12".parse::<Rgb>().unwrap_err();
        assert_eq!(err, ColorError::InvalidFormat("#12".to_string()));
        assert!(err.to_string().contains("#12"));

        let ok: Rgb = "#102030".parse().unwrap();
        assert_eq!(ok, Rgb::new(0x10, 0x20, 0x30));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
        assert_eq!(hex_to_rgb(&Rgb::BLACK.to_string()), Some(Rgb::BLACK));
    }
}
