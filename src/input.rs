use egui::{Context, LayerId, Pos2, Rect};

use crate::grid::CellPos;

/// How a pointer reached a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// The primary button was pressed over the cell
    Engage,
    /// The pointer moved into the cell
    Hover,
}

/// A pointer event targeting one canvas cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEvent {
    pub cell: CellPos,
    pub kind: PointerKind,
}

impl CellEvent {
    pub fn engage(cell: CellPos) -> Self {
        Self { cell, kind: PointerKind::Engage }
    }

    pub fn hover(cell: CellPos) -> Self {
        Self { cell, kind: PointerKind::Hover }
    }
}

/// Represents the input events the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed anywhere in the window
    PointerDown,
    /// Primary button released anywhere in the window
    PointerUp,
    /// Pointer activity over a canvas cell
    Cell(CellEvent),
}

/// Raw pointer state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    /// Another layer (a popup, a tooltip) sits between the pointer and the canvas
    pub covered: bool,
}

impl PointerSample {
    pub fn from_context(ctx: &Context, canvas_layer: LayerId) -> Self {
        let mut sample = ctx.input(|input| Self {
            position: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            covered: false,
        });
        // Panels are not areas, so an uncovered canvas reports no layer at all
        sample.covered = sample
            .position
            .and_then(|pos| ctx.layer_id_at(pos))
            .is_some_and(|layer| layer != canvas_layer);
        sample
    }
}

/// Maps a screen position to the cell under it, if the position is on the canvas.
pub fn cell_at(pos: Pos2, canvas: Rect, grid_size: usize) -> Option<CellPos> {
    if grid_size == 0 || !canvas.contains(pos) || canvas.width() <= 0.0 || canvas.height() <= 0.0 {
        return None;
    }
    let to_index = |offset: f32, extent: f32| {
        let index = (offset / extent * grid_size as f32).floor() as usize;
        index.min(grid_size - 1)
    };
    Some(CellPos::new(
        to_index(pos.y - canvas.min.y, canvas.height()),
        to_index(pos.x - canvas.min.x, canvas.width()),
    ))
}

/// Handles converting raw egui pointer input into canvas [`InputEvent`]s
#[derive(Debug, Default)]
pub struct CanvasInput {
    last_cell: Option<CellPos>,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the hovered cell, e.g. after the grid was rebuilt
    pub fn reset(&mut self) {
        self.last_cell = None;
    }

    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_layer: LayerId,
        canvas: Rect,
        grid_size: usize,
    ) -> Vec<InputEvent> {
        let sample = PointerSample::from_context(ctx, canvas_layer);
        self.process_sample(sample, canvas, grid_size)
    }

    /// Hover fires when the pointer enters a different cell; it is emitted
    /// before a press in the same frame so the press sees the new cell.
    /// A covered canvas yields no cell events, but presses and releases
    /// still go out.
    pub fn process_sample(
        &mut self,
        sample: PointerSample,
        canvas: Rect,
        grid_size: usize,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let cell = sample
            .position
            .filter(|_| !sample.covered)
            .and_then(|pos| cell_at(pos, canvas, grid_size));

        if let Some(cell) = cell {
            if self.last_cell != Some(cell) {
                events.push(InputEvent::Cell(CellEvent::hover(cell)));
            }
        }
        self.last_cell = cell;

        if sample.pressed {
            events.push(InputEvent::PointerDown);
            if let Some(cell) = cell {
                events.push(InputEvent::Cell(CellEvent::engage(cell)));
            }
        }
        if sample.released {
            events.push(InputEvent::PointerUp);
        }

        events
    }
}
