use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::{ColorError, GridError, PaletteError};
use crate::grid::Grid;
use crate::input::{CellEvent, InputEvent};
use crate::palette::{ColorInput, Palette};
use crate::sink::RenderSink;
use crate::state::EditorSession;
use crate::tools::{self, DrawingMode};

/// The pixel editor: one grid, the drawing session and the palette.
///
/// Every operation runs to completion before returning, including full
/// flood fills and grid rebuilds, and reports its visible effects to the
/// [`RenderSink`] passed in.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    grid: Grid,
    session: EditorSession,
    palette: Palette,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let size = config.clamp_size(config.default_size);
        Self {
            grid: Grid::new(size, config.background),
            session: EditorSession::new(config.default_mode, config.default_color),
            palette: Palette::new(config.presets.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn mode(&self) -> DrawingMode {
        self.session.mode()
    }

    pub fn active_color(&self) -> Color {
        self.session.active_color()
    }

    pub fn background(&self) -> Color {
        self.config.background
    }

    /// Re-sends the whole grid, e.g. to a freshly created sink
    pub fn repaint_all(&self, sink: &mut dyn RenderSink) {
        sink.rebuild(self.grid.size());
        for (cell, color) in self.grid.iter() {
            sink.paint_cell(cell, color);
        }
    }

    /// Dispatches one input event. Failed mutations are logged and dropped.
    pub fn handle_input(&mut self, event: InputEvent, sink: &mut dyn RenderSink) {
        match event {
            InputEvent::PointerDown => self.session.engage_pointer(),
            InputEvent::PointerUp => self.session.release_pointer(),
            InputEvent::Cell(cell_event) => {
                if let Err(err) = self.handle_pointer_event(cell_event, sink) {
                    log::warn!("Dropped {:?}: {}", cell_event, err);
                }
            }
        }
    }

    /// Applies the current mode to a canvas pointer event and returns the
    /// number of cells painted.
    pub fn handle_pointer_event(
        &mut self,
        event: CellEvent,
        sink: &mut dyn RenderSink,
    ) -> Result<usize, GridError> {
        let background = self.config.background;
        let command = tools::handle_pointer_event(event, &self.session, &self.grid, background)?;
        match command {
            Some(command) => command.execute(&mut self.grid, sink),
            None => Ok(0),
        }
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        let old = self.session.set_mode(mode);
        if old != mode {
            log::info!("Mode changed: {} -> {}", old.name(), mode.name());
        }
    }

    pub fn select_preset(
        &mut self,
        index: usize,
        sink: &mut dyn RenderSink,
    ) -> Result<Color, PaletteError> {
        let color = self.palette.get(index)?;
        self.apply_color(color, sink);
        Ok(color)
    }

    /// Parses a custom color; on failure the active color is left untouched.
    pub fn select_custom(
        &mut self,
        input: ColorInput<'_>,
        sink: &mut dyn RenderSink,
    ) -> Result<Color, ColorError> {
        let color = input
            .parse()
            .inspect_err(|err| log::warn!("Rejected custom color: {}", err))?;
        self.apply_color(color, sink);
        Ok(color)
    }

    fn apply_color(&mut self, color: Color, sink: &mut dyn RenderSink) {
        self.session.set_active_color(color);
        sink.sync_custom_color(color);
        log::debug!("Active color is now {}", color);
    }

    /// Replaces the grid with a blank one of `new_size` (clamped to the
    /// configured range) and repaints every cell. Returns the size used.
    pub fn resize(&mut self, new_size: usize, sink: &mut dyn RenderSink) -> usize {
        let size = self.config.clamp_size(new_size);
        if size != new_size {
            log::debug!("Clamped grid size {} to {}", new_size, size);
        }
        self.grid = Grid::new(size, self.config.background);
        self.repaint_all(sink);
        log::info!("Grid rebuilt at {}x{}", size, size);
        size
    }

    /// Blanks the grid without changing its size
    pub fn clear(&mut self, sink: &mut dyn RenderSink) {
        self.resize(self.grid.size(), sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellPos;
    use crate::sink::{RecordingSink, SinkCommand};

    #[test]
    fn test_new_editor_uses_config() {
        let editor = Editor::default();
        assert_eq!(editor.grid().size(), 32);
        assert_eq!(editor.mode(), DrawingMode::Pencil);
        assert_eq!(editor.active_color(), Color::BLACK);
        assert!(!editor.session().pointer_engaged());
    }

    #[test]
    fn test_repaint_all_rebuilds_first() {
        let editor = Editor::new(EditorConfig { default_size: 2, ..Default::default() });
        let mut sink = RecordingSink::new();
        editor.repaint_all(&mut sink);

        assert_eq!(sink.commands()[0], SinkCommand::Rebuild { size: 2 });
        assert_eq!(sink.painted().len(), 4);
    }

    #[test]
    fn test_pointer_state_follows_input() {
        let mut editor = Editor::default();
        let mut sink = RecordingSink::new();

        editor.handle_input(InputEvent::PointerDown, &mut sink);
        assert!(editor.session().pointer_engaged());
        editor.handle_input(InputEvent::PointerUp, &mut sink);
        assert!(!editor.session().pointer_engaged());
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_out_of_bounds_event_is_dropped() {
        let mut editor = Editor::new(EditorConfig { default_size: 4, ..Default::default() });
        let mut sink = RecordingSink::new();

        editor.handle_input(InputEvent::Cell(CellEvent::engage(CellPos::new(4, 0))), &mut sink);

        assert!(sink.commands().is_empty());
        assert_eq!(editor.grid().count(Color::WHITE), 16);
    }
}
