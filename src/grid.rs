use crate::color::Color;
use crate::error::GridError;

/// Address of one cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The up/down/left/right neighbors that lie inside a `size`x`size` grid.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = CellPos> {
        let Self { row, col } = self;
        [
            row.checked_sub(1).map(|r| Self::new(r, col)),
            (row + 1 < size).then(|| Self::new(row + 1, col)),
            col.checked_sub(1).map(|c| Self::new(row, c)),
            (col + 1 < size).then(|| Self::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Square grid of colored cells, stored row-major.
///
/// The dimension is fixed for the lifetime of a `Grid`; resizing means
/// building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Creates a `size`x`size` grid filled with `background`. A size of zero
    /// is raised to one.
    pub fn new(size: usize, background: Color) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![background; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    fn index(&self, cell: CellPos) -> Result<usize, GridError> {
        if self.contains(cell) {
            Ok(cell.row * self.size + cell.col)
        } else {
            Err(GridError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                size: self.size,
            })
        }
    }

    pub fn get(&self, cell: CellPos) -> Result<Color, GridError> {
        let index = self.index(cell)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, cell: CellPos, color: Color) -> Result<(), GridError> {
        let index = self.index(cell)?;
        self.cells[index] = color;
        Ok(())
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, Color)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, color)| (CellPos::new(index / size, index % size), *color))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.size)
    }

    /// Number of cells currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_uniform() {
        let grid = Grid::new(4, Color::WHITE);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.rows().count(), 4);
        assert!(grid.rows().all(|row| row.len() == 4));
        assert_eq!(grid.count(Color::WHITE), 16);
    }

    #[test]
    fn test_zero_size_becomes_one() {
        let grid = Grid::new(0, Color::WHITE);
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.get(CellPos::new(0, 0)), Ok(Color::WHITE));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, Color::WHITE);
        let red = Color::from_rgb(255, 0, 0);
        grid.set(CellPos::new(2, 1), red).unwrap();

        assert_eq!(grid.get(CellPos::new(2, 1)), Ok(red));
        assert_eq!(grid.count(red), 1);
        let (pos, _) = grid.iter().find(|(_, c)| *c == red).unwrap();
        assert_eq!(pos, CellPos::new(2, 1));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, Color::WHITE);
        let err = GridError::OutOfBounds { row: 3, col: 0, size: 3 };
        assert_eq!(grid.set(CellPos::new(3, 0), Color::BLACK), Err(err.clone()));
        assert_eq!(grid.get(CellPos::new(3, 0)), Err(err));
        assert_eq!(grid.count(Color::BLACK), 0);
    }

    #[test]
    fn test_neighbors_stay_in_bounds() {
        let mut corner: Vec<_> = CellPos::new(0, 0).neighbors(3).collect();
        corner.sort();
        assert_eq!(corner, vec![CellPos::new(0, 1), CellPos::new(1, 0)]);

        assert_eq!(CellPos::new(1, 1).neighbors(3).count(), 4);
        assert_eq!(CellPos::new(2, 2).neighbors(3).count(), 2);
        assert_eq!(CellPos::new(0, 0).neighbors(1).count(), 0);
    }
}
