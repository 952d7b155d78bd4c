pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod session;
pub mod snake;
pub mod state;
pub mod term;

pub type GridInt = u16;
pub type Coords = (GridInt, GridInt);

/// Cells per side of the square board.
pub const GRID_SIZE: GridInt = 20;
pub const TICK_INTERVAL_MS: u64 = 1000;
