use super::{
    body::Body,
    fruit::Fruit,
    grid::{Cell, Grid},
};

/// What a renderer should paint in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Body,
    Fruit,
}

/// Whether a session is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    GameOver,
}

/// Read-only picture of a session after a tick
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub head: Cell,
    pub score: u32,
    pub ticks: u64,
    pub status: SessionStatus,
    cells: Vec<CellState>,
}

impl Snapshot {
    pub(crate) fn capture(
        grid: &Grid,
        body: &Body,
        fruit: &Fruit,
        score: u32,
        ticks: u64,
        status: SessionStatus,
    ) -> Self {
        let mut cells = vec![CellState::Empty; grid.len()];
        cells[grid.index_of(fruit.cell())] = CellState::Fruit;
        // body drawn last so it hides a fruit spawned underneath
        for cell in body.cells() {
            cells[grid.index_of(cell)] = CellState::Body;
        }

        Self {
            width: grid.width(),
            height: grid.height(),
            head: body.head_cell(),
            score,
            ticks,
            status,
            cells,
        }
    }

    /// State of `cell`; out-of-range cells read as empty
    pub fn state_at(&self, cell: Cell) -> CellState {
        if cell.x >= self.width || cell.y >= self.height {
            return CellState::Empty;
        }
        self.cells[cell.y * self.width + cell.x]
    }

    /// Cell states row by row, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}
