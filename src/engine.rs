use crate::food::place_food;
use crate::snake::{step, validate, Direction};
use crate::state::GameState;
use crate::Coords;
use MoveResult::*;

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// `old_tail` is `None` when the snake ate and grew instead of moving its tail.
    Moved { new_head: Coords, old_head: Coords, old_tail: Option<Coords> },
    Crashed
}

impl MoveResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Crashed)
    }

    pub fn ate(&self) -> bool {
        matches!(self, Moved { old_tail: None, .. })
    }
}

/// Runs one tick of the game and returns the following state. `state` itself is never
/// touched, so the caller can keep or drop it.
///
/// Order matters: the head steps (wrapping at the edges), food is eaten and respawned,
/// the tail is vacated when nothing was eaten, and only then is the head checked
/// against the rest of the body. A collision ends the game and leaves the body where
/// it was. Once the game is over every further call returns `Crashed` unchanged.
pub fn advance<R: Rng + ?Sized>(
    state: &GameState,
    direction: Direction,
    rng: &mut R,
) -> (GameState, MoveResult) {
    let mut next = state.clone();

    if next.game_over {
        return (next, Crashed);
    }

    let direction = validate(state.direction, direction);
    let old_head = state.head();
    let new_head = step(old_head, direction, state.grid_size);
    next.direction = direction;

    let ate = new_head == state.food;
    if ate {
        next.food = place_food(state.grid_size, rng);
        next.score += 1;
    }

    // The tail cell is free again unless the snake is growing this tick.
    let remaining = if ate { state.snake.len() } else { state.snake.len() - 1 };
    if state.snake[..remaining].contains(&new_head) {
        next.game_over = true;
        return (next, Crashed);
    }

    let old_tail = if ate { None } else { next.snake.pop() };
    next.snake.insert(0, new_head);

    (next, Moved { new_head, old_head, old_tail })
}
