use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::command::Command;
use crate::error::GridError;
use crate::grid::Grid;
use crate::input::{CellEvent, PointerKind};
use crate::state::EditorSession;

/// How pointer input on the canvas is interpreted
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    #[default]
    Pencil,
    Eraser,
    Fill,
}

impl DrawingMode {
    pub const ALL: [DrawingMode; 3] = [DrawingMode::Pencil, DrawingMode::Eraser, DrawingMode::Fill];

    pub fn name(&self) -> &'static str {
        match self {
            DrawingMode::Pencil => "Pencil",
            DrawingMode::Eraser => "Eraser",
            DrawingMode::Fill => "Fill",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DrawingMode::Pencil => "✏",
            DrawingMode::Eraser => "⌫",
            DrawingMode::Fill => "🎨",
        }
    }
}

/// Decides which mutation, if any, a pointer event on the canvas produces.
///
/// Hover events only count while the pointer is engaged. A fill whose
/// target cell already holds the active color produces nothing.
pub fn handle_pointer_event(
    event: CellEvent,
    session: &EditorSession,
    grid: &Grid,
    background: Color,
) -> Result<Option<Command>, GridError> {
    if event.kind == PointerKind::Hover && !session.pointer_engaged() {
        return Ok(None);
    }

    let cell = event.cell;
    let command = match session.mode() {
        DrawingMode::Pencil => Command::PaintCell {
            cell,
            color: session.active_color(),
        },
        DrawingMode::Eraser => Command::PaintCell {
            cell,
            color: background,
        },
        DrawingMode::Fill => {
            let target = grid.get(cell)?;
            if target == session.active_color() {
                return Ok(None);
            }
            Command::FloodFill {
                seed: cell,
                target,
                replacement: session.active_color(),
            }
        }
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellPos;

    const RED: Color = Color::from_rgb(255, 0, 0);

    fn session(mode: DrawingMode, engaged: bool) -> EditorSession {
        let mut session = EditorSession::new(mode, RED);
        if engaged {
            session.engage_pointer();
        }
        session
    }

    #[test]
    fn test_hover_requires_engaged_pointer() {
        let grid = Grid::new(3, Color::WHITE);
        let hover = CellEvent::hover(CellPos::new(1, 1));

        let idle = session(DrawingMode::Pencil, false);
        assert_eq!(handle_pointer_event(hover, &idle, &grid, Color::WHITE), Ok(None));

        let engaged = session(DrawingMode::Pencil, true);
        let held = handle_pointer_event(hover, &engaged, &grid, Color::WHITE);
        assert_eq!(
            held,
            Ok(Some(Command::PaintCell { cell: CellPos::new(1, 1), color: RED }))
        );
    }

    #[test]
    fn test_engage_applies_without_pointer_state() {
        let grid = Grid::new(3, Color::WHITE);
        let engage = CellEvent::engage(CellPos::new(0, 2));

        let eraser = session(DrawingMode::Eraser, false);
        let command = handle_pointer_event(engage, &eraser, &grid, Color::WHITE);
        assert_eq!(
            command,
            Ok(Some(Command::PaintCell { cell: CellPos::new(0, 2), color: Color::WHITE }))
        );
    }

    #[test]
    fn test_fill_uses_current_cell_color() {
        let mut grid = Grid::new(3, Color::WHITE);
        let blue = Color::from_rgb(0, 0, 255);
        grid.set(CellPos::new(1, 0), blue).unwrap();

        let command = handle_pointer_event(
            CellEvent::engage(CellPos::new(1, 0)),
            &session(DrawingMode::Fill, false),
            &grid,
            Color::WHITE,
        );
        assert_eq!(
            command,
            Ok(Some(Command::FloodFill {
                seed: CellPos::new(1, 0),
                target: blue,
                replacement: RED,
            }))
        );
    }

    #[test]
    fn test_fill_on_active_color_is_noop() {
        let grid = Grid::new(3, RED);
        let command = handle_pointer_event(
            CellEvent::engage(CellPos::new(1, 1)),
            &session(DrawingMode::Fill, true),
            &grid,
            Color::WHITE,
        );
        assert_eq!(command, Ok(None));
    }

    #[test]
    fn test_fill_outside_grid_is_error() {
        let grid = Grid::new(3, Color::WHITE);
        let command = handle_pointer_event(
            CellEvent::engage(CellPos::new(5, 5)),
            &session(DrawingMode::Fill, true),
            &grid,
            Color::WHITE,
        );
        assert!(matches!(command, Err(GridError::OutOfBounds { .. })));
    }
}
