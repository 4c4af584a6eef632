use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::AcademyError;

/// Route the `log` facade into `path`.
///
/// The terminal belongs to the UI while it runs, so nothing is ever
/// written to stderr. Without a log file every record is discarded.
pub fn init(path: Option<&Path>) -> Result<(), AcademyError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
