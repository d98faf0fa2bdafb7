use crate::color::Color;
use crate::error::{ColorError, PaletteError};

pub const PALETTE_COLUMNS: usize = 10;

/// The stock swatches, ten per row: grays, saturated hues, then eight
/// progressively darker tint rows.
pub const DEFAULT_PRESETS: [Color; 80] = [
    Color::from_hex_u32(0x000000),
    Color::from_hex_u32(0x434343),
    Color::from_hex_u32(0x666666),
    Color::from_hex_u32(0x999999),
    Color::from_hex_u32(0xb7b7b7),
    Color::from_hex_u32(0xcccccc),
    Color::from_hex_u32(0xd9d9d9),
    Color::from_hex_u32(0xefefef),
    Color::from_hex_u32(0xf3f3f3),
    Color::from_hex_u32(0xffffff),
    Color::from_hex_u32(0x980000),
    Color::from_hex_u32(0xff0000),
    Color::from_hex_u32(0xff9900),
    Color::from_hex_u32(0xffff00),
    Color::from_hex_u32(0x00ff00),
    Color::from_hex_u32(0x00ffff),
    Color::from_hex_u32(0x4a86e8),
    Color::from_hex_u32(0x0000ff),
    Color::from_hex_u32(0x9900ff),
    Color::from_hex_u32(0xff00ff),
    Color::from_hex_u32(0xe6b8af),
    Color::from_hex_u32(0xf4cccc),
    Color::from_hex_u32(0xfce5cd),
    Color::from_hex_u32(0xfff2cc),
    Color::from_hex_u32(0xd9ead3),
    Color::from_hex_u32(0xd0e0e3),
    Color::from_hex_u32(0xc9daf8),
    Color::from_hex_u32(0xcfe2f3),
    Color::from_hex_u32(0xd9d2e9),
    Color::from_hex_u32(0xead1dc),
    Color::from_hex_u32(0xdd7e6b),
    Color::from_hex_u32(0xea9999),
    Color::from_hex_u32(0xf9cb9c),
    Color::from_hex_u32(0xffe599),
    Color::from_hex_u32(0xb6d7a8),
    Color::from_hex_u32(0xa2c4c9),
    Color::from_hex_u32(0xa4c2f4),
    Color::from_hex_u32(0x9fc5e8),
    Color::from_hex_u32(0xb4a7d6),
    Color::from_hex_u32(0xd5a6bd),
    Color::from_hex_u32(0xcc4125),
    Color::from_hex_u32(0xe06666),
    Color::from_hex_u32(0xf6b26b),
    Color::from_hex_u32(0xffd966),
    Color::from_hex_u32(0x93c47d),
    Color::from_hex_u32(0x76a5af),
    Color::from_hex_u32(0x6d9eeb),
    Color::from_hex_u32(0x6fa8dc),
    Color::from_hex_u32(0x8e7cc3),
    Color::from_hex_u32(0xc27ba0),
    Color::from_hex_u32(0xa61c00),
    Color::from_hex_u32(0xcc0000),
    Color::from_hex_u32(0xe69138),
    Color::from_hex_u32(0xf1c232),
    Color::from_hex_u32(0x6aa84f),
    Color::from_hex_u32(0x45818e),
    Color::from_hex_u32(0x3c78d8),
    Color::from_hex_u32(0x3d85c6),
    Color::from_hex_u32(0x674ea7),
    Color::from_hex_u32(0xa64d79),
    Color::from_hex_u32(0x85200c),
    Color::from_hex_u32(0x990000),
    Color::from_hex_u32(0xb45f06),
    Color::from_hex_u32(0xbf9000),
    Color::from_hex_u32(0x38761d),
    Color::from_hex_u32(0x134f5c),
    Color::from_hex_u32(0x1155cc),
    Color::from_hex_u32(0x0b5394),
    Color::from_hex_u32(0x351c75),
    Color::from_hex_u32(0x741b47),
    Color::from_hex_u32(0x5b0f00),
    Color::from_hex_u32(0x660000),
    Color::from_hex_u32(0x783f04),
    Color::from_hex_u32(0x7f6000),
    Color::from_hex_u32(0x274e13),
    Color::from_hex_u32(0x0c343d),
    Color::from_hex_u32(0x1c4587),
    Color::from_hex_u32(0x073763),
    Color::from_hex_u32(0x20124d),
    Color::from_hex_u32(0x4c1130),
];

/// A raw custom color as typed or picked by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorInput<'a> {
    /// Hex (`#rrggbb`, `#rgb`) or `rgb(r, g, b)` text
    Text(&'a str),
    /// Unchecked red, green and blue components
    Components(i64, i64, i64),
    /// Already canonical, e.g. from a color picker widget
    Color(Color),
}

impl ColorInput<'_> {
    pub fn parse(&self) -> Result<Color, ColorError> {
        match *self {
            ColorInput::Text(text) => text.parse(),
            ColorInput::Components(r, g, b) => Color::from_components(r, g, b),
            ColorInput::Color(color) => Ok(color),
        }
    }
}

/// Ordered list of preset swatches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    presets: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PRESETS.to_vec())
    }
}

impl Palette {
    pub fn new(presets: Vec<Color>) -> Self {
        Self { presets }
    }

    pub fn get(&self, index: usize) -> Result<Color, PaletteError> {
        self.presets
            .get(index)
            .copied()
            .ok_or(PaletteError::UnknownPreset {
                index,
                len: self.presets.len(),
            })
    }

    pub fn presets(&self) -> &[Color] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 80);
        assert_eq!(palette.get(0), Ok(Color::BLACK));
        assert_eq!(palette.get(9), Ok(Color::WHITE));
        assert_eq!(palette.get(10).map(|c| c.to_hex()), Ok("#980000".to_string()));
        assert_eq!(palette.get(80), Err(PaletteError::UnknownPreset { index: 80, len: 80 }));
    }

    #[test]
    fn test_color_input_parse() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(ColorInput::Text("#FF0000").parse(), Ok(red));
        assert_eq!(ColorInput::Text("rgb(255,0,0)").parse(), Ok(red));
        assert_eq!(ColorInput::Components(255, 0, 0).parse(), Ok(red));
        assert_eq!(ColorInput::Color(red).parse(), Ok(red));
        assert!(ColorInput::Components(0, 300, 0).parse().is_err());
        assert!(ColorInput::Text("red").parse().is_err());
    }
}
