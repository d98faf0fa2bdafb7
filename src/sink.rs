use crate::color::Color;
use crate::grid::CellPos;

/// Output channel for everything the editor wants shown on screen.
///
/// The editor never reads back from a sink; the grid is the only source of truth.
pub trait RenderSink {
    /// One call per mutated cell
    fn paint_cell(&mut self, cell: CellPos, color: Color);

    /// Sent before a full repaint of a freshly built `size`x`size` grid
    fn rebuild(&mut self, _size: usize) {}

    /// Mirror a newly selected color into the custom-color input control
    fn sync_custom_color(&mut self, _color: Color) {}
}

/// A single command as seen by a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCommand {
    PaintCell { cell: CellPos, color: Color },
    Rebuild { size: usize },
    SyncCustomColor(Color),
}

/// Sink that records every command, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    commands: Vec<SinkCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    /// Painted cells in issue order
    pub fn painted(&self) -> Vec<(CellPos, Color)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SinkCommand::PaintCell { cell, color } => Some((*cell, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSink for RecordingSink {
    fn paint_cell(&mut self, cell: CellPos, color: Color) {
        self.commands.push(SinkCommand::PaintCell { cell, color });
    }

    fn rebuild(&mut self, size: usize) {
        self.commands.push(SinkCommand::Rebuild { size });
    }

    fn sync_custom_color(&mut self, color: Color) {
        self.commands.push(SinkCommand::SyncCustomColor(color));
    }
}
