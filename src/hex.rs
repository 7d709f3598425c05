//! Parse and format colors as hexadecimal strings.
//!
//! Accepted forms are `#RGB`, `#RRGGBB` and `#RRGGBBAA`. Digits are case
//! insensitive. Formatting always produces uppercase digits and only includes
//! the alpha pair when the color is not fully opaque.

use std::str::FromStr;

use crate::{
    color::{Color, Component, Space},
    math::{from_u8, to_u8},
    models::{Model, Srgb},
};

/// Reasons a string could not be parsed as a hex color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexParseError {
    /// The string does not start with `#`.
    #[error("hex color must start with '#'")]
    MissingPrefix,
    /// The number of digits after `#` is not 3, 6 or 8.
    #[error("expected 3, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// A character after `#` is not a hexadecimal digit.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Parse a hex color string into a [`Color`] in the sRGB color space.
///
/// ```rust
/// use hexswatch::{hex::parse_hex, Space};
/// let red = parse_hex("#F00").unwrap();
/// assert_eq!(red.space, Space::Srgb);
/// assert_eq!(red.components.0, 1.0);
/// ```
pub fn parse_hex(input: &str) -> Result<Color, HexParseError> {
    let digits = input
        .strip_prefix('#')
        .ok_or(HexParseError::MissingPrefix)?;

    let digits = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(HexParseError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let pair = |i: usize| (digits[i] << 4) | digits[i + 1];

    let (red, green, blue, alpha) = match digits.len() {
        3 => (digits[0] * 17, digits[1] * 17, digits[2] * 17, u8::MAX),
        6 => (pair(0), pair(2), pair(4), u8::MAX),
        8 => (pair(0), pair(2), pair(4), pair(6)),
        len => return Err(HexParseError::InvalidLength(len)),
    };

    Ok(Srgb::from_u8(red, green, blue).to_color(Some(from_u8::<Component>(alpha))))
}

/// Format a color of any space as an uppercase hex string. The alpha pair is
/// appended only when the alpha does not round to 255. A missing alpha is
/// treated as opaque.
pub fn format_hex(color: &Color) -> String {
    let [red, green, blue] = Srgb::from_color(&color.to_space(Space::Srgb)).to_u8();
    let alpha = to_u8(color.alpha().unwrap_or(1.0));

    if alpha == u8::MAX {
        format!("#{red:02X}{green:02X}{blue:02X}")
    } else {
        format!("#{red:02X}{green:02X}{blue:02X}{alpha:02X}")
    }
}

impl FromStr for Color {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}
