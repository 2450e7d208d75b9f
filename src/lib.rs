//! Torus Snake - the classic snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic: grid, snake body, fruit and the per-tick session (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal loop (modes module)
//! - Play clock and best score (metrics module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
