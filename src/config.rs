use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::palette::DEFAULT_PRESETS;
use crate::tools::DrawingMode;

/// Startup settings for the editor.
///
/// Loaded from JSON; any field left out of the file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub default_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub default_color: Color,
    pub default_mode: DrawingMode,
    /// Fill color of new grids and the color the eraser paints
    pub background: Color,
    pub presets: Vec<Color>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_size: 32,
            min_size: 1,
            max_size: 64,
            default_color: Color::BLACK,
            default_mode: DrawingMode::Pencil,
            background: Color::WHITE,
            presets: DEFAULT_PRESETS.to_vec(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size == 0 {
            return Err(ConfigError::Invalid("min_size must be at least 1".to_string()));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::Invalid(format!(
                "min_size {} is larger than max_size {}",
                self.min_size, self.max_size
            )));
        }
        if !self.size_range().contains(&self.default_size) {
            return Err(ConfigError::Invalid(format!(
                "default_size {} is outside {}..={}",
                self.default_size, self.min_size, self.max_size
            )));
        }
        Ok(())
    }

    pub fn size_range(&self) -> RangeInclusive<usize> {
        self.min_size..=self.max_size
    }

    /// Brings a requested grid size into the configured range
    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.min_size, self.max_size.max(self.min_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_size, 32);
        assert_eq!(config.presets.len(), 80);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json_str(
            r##"{ "default_size": 16, "background": "#eeeeee", "default_mode": "fill" }"##,
        )
        .unwrap();

        assert_eq!(config.default_size, 16);
        assert_eq!(config.background, Color::from_rgb(0xee, 0xee, 0xee));
        assert_eq!(config.default_mode, DrawingMode::Fill);
        assert_eq!(config.max_size, 64);
        assert_eq!(config.default_color, Color::BLACK);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            EditorConfig::from_json_str(r#"{ "min_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json_str(r#"{ "min_size": 10, "max_size": 5 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json_str(r#"{ "default_size": 100 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json_str(r#"{ "background": "not a color" }"#),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = EditorConfig::load("/nonexistent/pixel_sketch.json");
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_clamp_size() {
        let config = EditorConfig::default();
        assert_eq!(config.clamp_size(0), 1);
        assert_eq!(config.clamp_size(8), 8);
        assert_eq!(config.clamp_size(500), 64);
    }
}
