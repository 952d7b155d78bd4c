use crate::engine::{advance, MoveResult};
use crate::snake::{validate, Direction};
use crate::state::GameState;
use crate::GridInt;

use log::{debug, info, trace};
use rand::Rng;

/// Single owner of the game state between ticks.
///
/// Turn requests that arrive between two ticks overwrite each other; only the last
/// accepted one is used when the next tick runs. Requests are checked against the
/// direction the snake is actually moving, so two quick turns can't fold it back
/// onto itself.
pub struct Session<R: Rng> {
    state: GameState,
    pending: Direction,
    rng: R,
    ticks: u64,
}

impl<R: Rng> Session<R> {
    pub fn new(grid_size: GridInt, rng: R) -> Self {
        Session::from_state(GameState::new(grid_size), rng)
    }

    pub fn from_state(state: GameState, rng: R) -> Self {
        let pending = state.direction();
        Session { state, pending, rng, ticks: 0 }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Records a turn for the next tick. Returns whether it was accepted.
    pub fn request_direction(&mut self, requested: Direction) -> bool {
        if self.state.is_over() || validate(self.state.direction(), requested) != requested {
            return false;
        }

        self.pending = requested;
        true
    }

    /// Runs one tick, or nothing once the game is over.
    pub fn tick(&mut self) -> Option<MoveResult> {
        if self.state.is_over() {
            return None;
        }

        let (next, res) = advance(&self.state, self.pending, &mut self.rng);
        self.ticks += 1;

        match &res {
            MoveResult::Crashed => {
                info!(
                    "game over after {} ticks: score {}, length {}",
                    self.ticks,
                    next.score(),
                    next.len()
                );
            },
            MoveResult::Moved { new_head, .. } if res.ate() => {
                info!("food eaten at {:?}, score {}", new_head, next.score());
                debug!("food respawned at {:?}", next.food());
            },
            MoveResult::Moved { new_head, .. } => {
                trace!("tick {}: head {:?}", self.ticks, new_head);
            },
        }

        self.state = next;
        Some(res)
    }

    /// Throws the finished game away and starts again from the initial board.
    pub fn restart(&mut self) {
        info!("restarting, previous score {}", self.state.score());
        self.state = GameState::new(self.state.grid_size());
        self.pending = self.state.direction();
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn session() -> Session<StdRng> {
        Session::new(20, StdRng::seed_from_u64(3))
    }

    #[test]
    fn last_request_wins() {
        let mut s = session();
        assert!(s.request_direction(Up));
        assert!(s.request_direction(Down));
        s.tick();
        assert_eq!(s.state().head(), (10, 11));
    }

    #[test]
    fn reversal_request_keeps_earlier_turn() {
        let mut s = session();
        assert!(s.request_direction(Up));
        assert!(!s.request_direction(Left));
        assert_eq!(s.pending_direction(), Up);
        s.tick();
        assert_eq!(s.state().head(), (10, 9));
    }

    #[test]
    fn no_ticks_after_game_over() {
        let state = GameState::with_snake(20, vec![(1, 0), (1, 1), (0, 1), (0, 0)], (9, 9), Down);
        let mut s = Session::from_state(state, StdRng::seed_from_u64(3));

        assert_eq!(s.tick(), Some(MoveResult::Crashed));
        assert!(s.state().is_over());
        assert_eq!(s.tick(), None);
        assert_eq!(s.ticks(), 1);
        assert!(!s.request_direction(Left));
    }

    #[test]
    fn restart_recreates_the_initial_board() {
        let mut s = session();
        s.tick();
        s.tick();
        s.restart();
        assert_eq!(s.state(), &GameState::initial());
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.pending_direction(), Right);
    }
}
