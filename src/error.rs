use thiserror::Error;

/// Errors raised by the grid model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell coordinate outside the live grid
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}

/// Errors raised while turning user input into a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("no preset at index {index} (palette has {len} colors)")]
    UnknownPreset { index: usize, len: usize },
}

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
