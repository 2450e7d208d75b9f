use super::{direction::Direction, error::GameError};

/// A single block of the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Wrap-around play field of `width * height` cells.
///
/// Every edge is glued to the opposite one, so every cell has all four
/// neighbors and the snake can never leave the field. Neighbors are derived
/// with modulo arithmetic rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// A grid always has at least one cell
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<Cell> {
        let cell = Cell::new(x, y);
        self.contains(cell).then_some(cell)
    }

    /// Cell adjacent to `cell` in `direction`, wrapping at the edges
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let x = (cell.x as isize + dx).rem_euclid(self.width as isize) as usize;
        let y = (cell.y as isize + dy).rem_euclid(self.height as isize) as usize;
        Cell::new(x, y)
    }

    /// Row-major index of `cell`
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.y * self.width + cell.x
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GameError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_cell_at_bounds() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.cell_at(3, 2), Some(Cell::new(3, 2)));
        assert_eq!(grid.cell_at(4, 0), None);
        assert_eq!(grid.cell_at(0, 3), None);
    }

    #[test]
    fn test_neighbors_inside() {
        let grid = Grid::new(5, 5).unwrap();
        let cell = Cell::new(2, 2);
        assert_eq!(grid.neighbor(cell, Direction::Right), Cell::new(3, 2));
        assert_eq!(grid.neighbor(cell, Direction::Left), Cell::new(1, 2));
        assert_eq!(grid.neighbor(cell, Direction::Up), Cell::new(2, 1));
        assert_eq!(grid.neighbor(cell, Direction::Down), Cell::new(2, 3));
    }

    #[test]
    fn test_neighbors_wrap_at_edges() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(grid.neighbor(Cell::new(4, 1), Direction::Right), Cell::new(0, 1));
        assert_eq!(grid.neighbor(Cell::new(0, 1), Direction::Left), Cell::new(4, 1));
        assert_eq!(grid.neighbor(Cell::new(2, 0), Direction::Up), Cell::new(2, 3));
        assert_eq!(grid.neighbor(Cell::new(2, 3), Direction::Down), Cell::new(2, 0));
    }

    #[test]
    fn test_wrap_round_trip() {
        for (width, height) in [(2, 2), (2, 7), (5, 3), (9, 9)] {
            let grid = Grid::new(width, height).unwrap();
            for cell in grid.cells() {
                for dir in Direction::ALL {
                    let there = grid.neighbor(cell, dir);
                    assert!(grid.contains(there));
                    assert_eq!(grid.neighbor(there, dir.opposite()), cell);
                }
            }
        }
    }

    #[test]
    fn test_single_cell_grid_is_its_own_neighbor() {
        let grid = Grid::new(1, 1).unwrap();
        let only = Cell::new(0, 0);
        for dir in Direction::ALL {
            assert_eq!(grid.neighbor(only, dir), only);
        }
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.len());
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(grid.index_of(*cell), i);
        }
        assert_eq!(cells[3], Cell::new(0, 1));
    }
}
