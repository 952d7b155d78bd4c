use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::GameError;

/// Sends log output to `path`, filtered by `RUST_LOG` (info by default).
pub fn init(path: &Path) -> Result<(), GameError> {
    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
