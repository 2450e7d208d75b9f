use thiserror::Error;

/// Caller contract violations detected while building a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("tick interval must be a positive number of seconds, got {0}")]
    InvalidTickInterval(f64),

    #[error("fruit spawn region is empty on a {width}x{height} grid")]
    EmptySpawnRegion { width: usize, height: usize },

    #[error("cell ({x}, {y}) lies outside the grid")]
    CellOutOfBounds { x: usize, y: usize },
}
