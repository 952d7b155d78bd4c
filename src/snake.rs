use crate::{Coords, GridInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Returns the direction the snake should take when `requested` arrives while it is
/// heading `current`. Turning straight back is ignored rather than reported.
pub fn validate(current: Direction, requested: Direction) -> Direction {
    if requested == current.opposite() {
        current
    } else {
        requested
    }
}

/// Moves one cell from `pos` on a `grid_size` x `grid_size` board. The board has no
/// walls: leaving one edge re-enters from the opposite one.
pub fn step(pos: Coords, direction: Direction, grid_size: GridInt) -> Coords {
    let (x, y) = pos;

    match direction {
        Up => (x, (y + grid_size - 1) % grid_size),
        Down => (x, (y + 1) % grid_size),
        Left => ((x + grid_size - 1) % grid_size, y),
        Right => ((x + 1) % grid_size, y),
    }
}
