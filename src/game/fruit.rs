use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    error::GameError,
    grid::{Cell, Grid},
};

/// Which cells a fruit (or the starting head) may be placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnRegion {
    /// Every cell of the grid
    #[default]
    Full,
    /// Every cell except row 0 and column 0
    ExcludeOrigin,
}

impl SpawnRegion {
    fn first_index(self) -> usize {
        match self {
            SpawnRegion::Full => 0,
            SpawnRegion::ExcludeOrigin => 1,
        }
    }

    /// Number of cells the region covers on a grid of the given size
    pub fn cell_count(self, width: usize, height: usize) -> usize {
        let first = self.first_index();
        width.saturating_sub(first) * height.saturating_sub(first)
    }

    pub fn check(self, width: usize, height: usize) -> Result<(), GameError> {
        if self.cell_count(width, height) == 0 {
            return Err(GameError::EmptySpawnRegion { width, height });
        }
        Ok(())
    }
}

/// The target the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    cell: Cell,
}

impl Fruit {
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }
}

/// Places fruit uniformly at random inside a [`SpawnRegion`].
///
/// Cells under the snake are not avoided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitSpawner {
    region: SpawnRegion,
}

impl FruitSpawner {
    pub fn new(region: SpawnRegion) -> Self {
        Self { region }
    }

    pub fn region(&self) -> SpawnRegion {
        self.region
    }

    /// Uniform random cell of the region. The region must be non-empty
    /// for this grid, see [`SpawnRegion::check`].
    pub fn random_cell<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Cell {
        let first = self.region.first_index();
        let x = rng.gen_range(first..grid.width());
        let y = rng.gen_range(first..grid.height());
        Cell::new(x, y)
    }

    pub fn spawn<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Fruit {
        Fruit::new(self.random_cell(grid, rng))
    }

    /// Replace an eaten fruit. Never lands on `previous` unless the region
    /// has no other cell.
    pub fn respawn<R: Rng>(&self, grid: &Grid, previous: Cell, rng: &mut R) -> Fruit {
        if self.region.cell_count(grid.width(), grid.height()) < 2 {
            return self.spawn(grid, rng);
        }

        loop {
            let cell = self.random_cell(grid, rng);
            if cell != previous {
                return Fruit::new(cell);
            }
        }
    }
}

impl Default for FruitSpawner {
    fn default() -> Self {
        Self::new(SpawnRegion::default())
    }
}
