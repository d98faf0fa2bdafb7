//! 4-connected flood fill over a [`Grid`].

use crate::color::Color;
use crate::error::GridError;
use crate::grid::{CellPos, Grid};
use crate::sink::RenderSink;

/// Repaints the region of `target`-colored cells that is 4-connected to
/// `seed`, and returns how many cells were painted.
///
/// Cells are repainted as they are pushed on the work stack, so each one is
/// visited at most once and the stack never holds more than `size * size`
/// entries. Nothing happens when `target == replacement` or when the seed
/// does not currently hold `target`.
pub fn flood_fill(
    grid: &mut Grid,
    seed: CellPos,
    target: Color,
    replacement: Color,
    sink: &mut dyn RenderSink,
) -> Result<usize, GridError> {
    if target == replacement {
        log::debug!("Skipping fill at {:?}: region is already {}", seed, replacement);
        return Ok(0);
    }
    if grid.get(seed)? != target {
        return Ok(0);
    }

    let size = grid.size();
    let mut painted = 0;
    let mut stack = vec![seed];
    grid.set(seed, replacement)?;
    sink.paint_cell(seed, replacement);
    painted += 1;

    while let Some(cell) = stack.pop() {
        for neighbor in cell.neighbors(size) {
            if grid.get(neighbor)? == target {
                grid.set(neighbor, replacement)?;
                sink.paint_cell(neighbor, replacement);
                painted += 1;
                stack.push(neighbor);
            }
        }
    }

    log::debug!("Filled {} cells from {:?} with {}", painted, seed, replacement);
    Ok(painted)
}
