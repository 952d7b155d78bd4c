use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;
use crate::{GridInt, GRID_SIZE, TICK_INTERVAL_MS};

const MIN_GRID_SIZE: GridInt = 5;
const MAX_GRID_SIZE: GridInt = 60;
const MIN_TICK_MS: u64 = 50;
const MAX_TICK_MS: u64 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "grid-snake", version, about = "Snake on a wrap-around grid")]
pub struct Args {
    /// Cells per side of the board
    #[arg(long, default_value_t = GRID_SIZE)]
    pub grid_size: GridInt,

    /// Milliseconds between two moves
    #[arg(long, default_value_t = TICK_INTERVAL_MS)]
    pub tick_ms: u64,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where log output goes; the terminal itself is taken by the board
    #[arg(long, default_value = "grid-snake.log")]
    pub log_file: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub grid_size: GridInt,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: GRID_SIZE,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            seed: None,
            log_file: PathBuf::from("grid-snake.log"),
        }
    }
}

impl Args {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                got: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_ms) {
            return Err(ConfigError::TickInterval {
                got: self.tick_ms,
                min: MIN_TICK_MS,
                max: MAX_TICK_MS,
            });
        }

        Ok(Config {
            grid_size: self.grid_size,
            tick_interval: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            log_file: self.log_file,
        })
    }
}
