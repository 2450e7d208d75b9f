//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The play field is a torus: leaving one edge re-enters at the opposite one,
//! so the only way to lose is for the snake to run into itself.

pub mod body;
pub mod config;
pub mod direction;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use body::{Body, Segment};
pub use config::GameConfig;
pub use direction::Direction;
pub use error::GameError;
pub use fruit::{Fruit, FruitSpawner, SpawnRegion};
pub use grid::{Cell, Grid};
pub use session::{GameOver, Session, TickOutcome};
pub use snapshot::{CellState, SessionStatus, Snapshot};
