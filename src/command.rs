use crate::color::Color;
use crate::error::GridError;
use crate::fill::flood_fill;
use crate::grid::{CellPos, Grid};
use crate::sink::RenderSink;

/// A mutation of the grid produced by the drawing controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write a single cell (pencil and eraser)
    PaintCell { cell: CellPos, color: Color },
    /// Repaint the `target`-colored region around `seed`
    FloodFill {
        seed: CellPos,
        target: Color,
        replacement: Color,
    },
}

impl Command {
    /// Applies the command to `grid`, paints every changed cell into `sink`,
    /// and returns the number of cells painted.
    pub fn execute(&self, grid: &mut Grid, sink: &mut dyn RenderSink) -> Result<usize, GridError> {
        match *self {
            Command::PaintCell { cell, color } => {
                grid.set(cell, color)?;
                sink.paint_cell(cell, color);
                Ok(1)
            }
            Command::FloodFill {
                seed,
                target,
                replacement,
            } => flood_fill(grid, seed, target, replacement, sink),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::PaintCell { .. } => "Paint Cell",
            Command::FloodFill { .. } => "Flood Fill",
        }
    }
}
