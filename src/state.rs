use crate::snake::Direction;
use crate::{Coords, GridInt, GRID_SIZE};

/// Everything the board shows after a tick. Only the tick engine produces new values;
/// the driver swaps them in whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid_size: GridInt,
    pub(crate) snake: Vec<Coords>,
    pub(crate) food: Coords,
    pub(crate) score: u32,
    pub(crate) direction: Direction,
    pub(crate) game_over: bool,
}

/// Head of a fresh snake: the middle of the board, (10, 10) on the default grid.
pub fn initial_head(grid_size: GridInt) -> Coords {
    (grid_size / 2, grid_size / 2)
}

/// First food: three quarters down the diagonal, (15, 15) on the default grid.
pub fn initial_food(grid_size: GridInt) -> Coords {
    (grid_size * 3 / 4, grid_size * 3 / 4)
}

impl GameState {
    pub fn new(grid_size: GridInt) -> Self {
        GameState::with_snake(
            grid_size,
            vec![initial_head(grid_size)],
            initial_food(grid_size),
            Direction::Right,
        )
    }

    /// Starting position on the default board.
    pub fn initial() -> Self {
        GameState::new(GRID_SIZE)
    }

    /// Builds a running game from an explicit body, head first.
    pub fn with_snake(
        grid_size: GridInt,
        snake: Vec<Coords>,
        food: Coords,
        direction: Direction,
    ) -> Self {
        debug_assert!(!snake.is_empty(), "snake needs at least one segment");
        GameState { grid_size, snake, food, score: 0, direction, game_over: false }
    }

    pub fn grid_size(&self) -> GridInt {
        self.grid_size
    }

    /// Segments from head to tail.
    pub fn body(&self) -> &[Coords] {
        &self.snake
    }

    pub fn head(&self) -> Coords {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.snake.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_reference_board() {
        let state = GameState::initial();
        assert_eq!(state.grid_size(), 20);
        assert_eq!(state.body(), &[(10, 10)]);
        assert_eq!(state.food(), (15, 15));
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), Direction::Right);
        assert!(!state.is_over());
    }

    #[test]
    fn smaller_boards_keep_head_and_food_apart() {
        for size in 5..=60 {
            let state = GameState::new(size);
            assert_ne!(state.head(), state.food());
            assert!(state.food().0 < size && state.food().1 < size);
        }
    }
}
