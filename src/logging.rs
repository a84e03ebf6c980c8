use anyhow::Context;
use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::File;
use std::path::Path;

/// Environment variable holding the `env_logger` filter directives
pub(crate) const LOG_ENV_VAR: &str = "STAYRANGE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Send log records to the file at `path`, truncating it first.
///
/// Nothing may be logged to the terminal while the calendar is drawn, so
/// there is no fallback to stderr; without a log file, logging stays off.
pub(crate) fn init_file_logger(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Builder::from_env(Env::default().filter_or(LOG_ENV_VAR, DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
