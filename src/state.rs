use crate::color::Color;
use crate::tools::DrawingMode;

/// Per-instance drawing state: mode, active color and pointer engagement.
///
/// Mode changes happen only through [`EditorSession::set_mode`]; nothing
/// transitions automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    mode: DrawingMode,
    active_color: Color,
    pointer_engaged: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(DrawingMode::default(), Color::BLACK)
    }
}

impl EditorSession {
    pub fn new(mode: DrawingMode, active_color: Color) -> Self {
        Self {
            mode,
            active_color,
            pointer_engaged: false,
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Switches to `mode` and returns the previous one
    pub fn set_mode(&mut self, mode: DrawingMode) -> DrawingMode {
        std::mem::replace(&mut self.mode, mode)
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub fn pointer_engaged(&self) -> bool {
        self.pointer_engaged
    }

    pub fn engage_pointer(&mut self) {
        self.pointer_engaged = true;
    }

    pub fn release_pointer(&mut self) {
        self.pointer_engaged = false;
    }
}
