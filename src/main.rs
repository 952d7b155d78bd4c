use clap::Parser;

use grid_snake::config::Args;
use grid_snake::error::GameError;
use grid_snake::game::SnakeGame;
use grid_snake::logging;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config = Args::parse().into_config()?;
    logging::init(&config.log_file)?;

    // Dropping the game puts the terminal back, even when play ends in an error.
    let mut game = SnakeGame::new(config)?;
    game.run()
}
