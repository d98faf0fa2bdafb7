use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Canonical opaque RGB color.
///
/// Every representation the editor accepts (hex text, `rgb(r, g, b)` text,
/// component triples, egui colors) is normalized into this type, so two
/// colors compare equal exactly when they denote the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value; the top byte is ignored.
    pub const fn from_hex_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Builds a color from unchecked components, each of which must be in `0..=255`.
    pub fn from_components(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        let channel = |value: i64| {
            u8::try_from(value).map_err(|_| {
                ColorError::InvalidColorFormat(format!("rgb({}, {}, {})", r, g, b))
            })
        };
        Ok(Self::from_rgb(channel(r)?, channel(g)?, channel(b)?))
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn parse_hex(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex_u32),
            // #rgb shorthand: every digit is doubled
            3 => {
                let mut channels = digits
                    .chars()
                    .filter_map(|c| c.to_digit(16))
                    .map(|d| (d * 17) as u8);
                Some(Self::from_rgb(channels.next()?, channels.next()?, channels.next()?))
            }
            _ => None,
        }
    }

    fn parse_functional(body: &str) -> Option<Result<Self, ColorError>> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }
        let mut components = [0i64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part.parse().ok()?;
        }
        Some(Self::from_components(components[0], components[1], components[2]))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb(r, g, b)`, case-insensitive.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidColorFormat(input.to_string());
        let text = input.trim().to_ascii_lowercase();

        if let Some(body) = text
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_functional(body).ok_or_else(invalid)?;
        }

        let digits = text.strip_prefix('#').unwrap_or(&text);
        Self::parse_hex(digits).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

impl From<Color32> for Color {
    /// Drops alpha; the grid only holds opaque colors.
    fn from(color: Color32) -> Self {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        Self::from_rgb(r, g, b)
    }
}
