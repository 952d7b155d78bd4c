use std::time::Instant;

use crate::config::Config;
use crate::engine::MoveResult::{self, *};
use crate::error::GameError;
use crate::input::{command_for, Command};
use crate::session::Session;
use crate::state::GameState;
use crate::term::{BoardLayout, TermManager};
use crate::Coords;

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SNAKE_BODY_CELL: &str = "██";
const FOOD_CELL: &str = "O ";
const DEAD_SNAKE_CELL: &str = "XX";
const EMPTY_CELL: &str = "  ";
const TITLE: &str = "Snake Game";

/// What to do once a game has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Restart,
    Exit,
}

pub struct SnakeGame {
    config: Config,
    term: TermManager,
    layout: BoardLayout,
    session: Session<StdRng>,
}

impl SnakeGame {
    pub fn new(config: Config) -> Result<Self, GameError> {
        let term = TermManager::new()?;
        let layout = BoardLayout::centered(config.grid_size, term.get_terminal_size())?;

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!(
            "starting: grid {}x{}, tick {:?}, seed {}",
            config.grid_size, config.grid_size, config.tick_interval, seed
        );

        let session = Session::new(config.grid_size, StdRng::seed_from_u64(seed));
        Ok(SnakeGame { config, term, layout, session })
    }

    pub fn run(&mut self) -> Result<(), GameError> {
        self.term.setup()?;

        loop {
            match self.play()? {
                Outcome::Exit => break,
                Outcome::Restart => self.session.restart(),
            }
        }

        info!("exiting");
        self.term.restore()?;
        Ok(())
    }

    /// Plays one game until the snake crashes or the player quits.
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        self.draw_board()?;

        let interval = self.config.tick_interval;
        let mut next_tick = Instant::now() + interval;

        loop {
            let now = Instant::now();

            if now >= next_tick {
                // Re-armed from the tick itself, so a slow redraw never queues up extra ticks.
                next_tick = now + interval;

                if let Some(move_res) = self.session.tick() {
                    if move_res.is_terminal() {
                        self.game_over()?;
                        break;
                    }
                    self.print_snake_update(&move_res)?;
                }
                continue;
            }

            if let Some(key_ev) = self.term.read_key_timeout(next_tick - now)? {
                match command_for(&key_ev) {
                    Command::Quit => return Ok(Outcome::Exit),
                    Command::Turn(dir) => {
                        self.session.request_direction(dir);
                    },
                    Command::Other => {},
                }
            }
        }

        // Quit if the user CTRL+C's after the game
        match command_for(&self.term.read_key_blocking()?) {
            Command::Quit => Ok(Outcome::Exit),
            _ => Ok(Outcome::Restart),
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn state(&self) -> &GameState {
        self.session.state()
    }

    fn draw_board(&mut self) -> Result<(), GameError> {
        self.term.clear()?;
        self.term.draw_borders((self.layout.left, self.layout.top), self.layout.bottom_right())?;

        let food = self.state().food();
        self.print_cell(food, FOOD_CELL)?;
        self.print_snake()?;
        self.print_score()?;
        self.term.flush()?;
        Ok(())
    }

    fn game_over(&mut self) -> Result<(), GameError> {
        let body = self.state().body().to_vec();
        for pos in body {
            self.print_cell(pos, DEAD_SNAKE_CELL)?;
        }
        self.print_score()?;

        let score = self.state().score();
        self.term.show_message(&[
            "Game Over!",
            &*format!("Score: {}", score),
            "",
            "Press any key to play again,",
            "or q / CTRL+C to quit."
        ])?;
        Ok(())
    }

    fn print_snake(&mut self) -> Result<(), GameError> {
        let body = self.state().body().to_vec();
        let head = self.head_cell();

        for (i, pos) in body.into_iter().enumerate() {
            let cell = if i == 0 {head.as_str()} else {SNAKE_BODY_CELL};
            self.print_cell(pos, cell)?;
        }
        Ok(())
    }

    fn print_snake_update(&mut self, mov: &MoveResult) -> Result<(), GameError> {
        if let Moved { new_head, old_head, old_tail } = mov {
            // A one-cell snake vacates its old head, so the tail is cleared after it.
            self.print_cell(*old_head, SNAKE_BODY_CELL)?;

            if let Some(old_tail_pos) = old_tail {
                let food = self.state().food();
                let cell = if *old_tail_pos == food {FOOD_CELL} else {EMPTY_CELL};
                self.print_cell(*old_tail_pos, cell)?;
            }

            let head = self.head_cell();
            self.print_cell(*new_head, &head)?;

            if mov.ate() {
                let food = self.state().food();
                // Food can respawn under the body; the snake is drawn on top then.
                if !self.state().occupies(food) {
                    self.print_cell(food, FOOD_CELL)?;
                }
                self.print_score()?;
            }

            self.term.flush()?;
        }
        Ok(())
    }

    fn print_score(&mut self) -> Result<(), GameError> {
        let width = BoardLayout::required_size(self.layout.grid_size).0;
        let line = header_line(self.state().score(), width);
        self.term.print_str_at(self.layout.header(), &line)?;
        Ok(())
    }

    fn print_cell(&mut self, pos: Coords, cell: &str) -> Result<(), GameError> {
        self.term.print_str_at(self.layout.cell(pos), cell)?;
        Ok(())
    }

    fn head_cell(&self) -> String {
        let ch = self.state().direction().head_char();
        [ch, ch].iter().collect()
    }
}

/// Title and score, dropping the title when the board is too narrow to hold both.
fn header_line(score: u32, width: u16) -> String {
    let full = format!("{}  Score: {}", TITLE, score);
    if full.chars().count() <= width as usize {
        full
    } else {
        format!("Score: {}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shows_title_and_score() {
        assert_eq!(header_line(7, 42), "Snake Game  Score: 7");
    }

    #[test]
    fn narrow_board_header_keeps_only_the_score() {
        assert_eq!(header_line(12, 12), "Score: 12");
    }

    #[test]
    fn food_is_drawn_as_an_o() {
        assert!(FOOD_CELL.starts_with('O'));
        assert_eq!(FOOD_CELL.chars().count(), EMPTY_CELL.chars().count());
    }
}
