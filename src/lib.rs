#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod fill;
pub mod grid;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod sink;
pub mod state;
pub mod tools;

pub use app::SketchApp;
pub use color::Color;
pub use command::Command;
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{ColorError, ConfigError, GridError, PaletteError};
pub use fill::flood_fill;
pub use grid::{CellPos, Grid};
pub use input::{CanvasInput, CellEvent, InputEvent, PointerKind};
pub use palette::{ColorInput, Palette};
pub use renderer::Renderer;
pub use sink::{RecordingSink, RenderSink, SinkCommand};
pub use state::EditorSession;
pub use tools::DrawingMode;
