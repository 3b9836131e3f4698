use crate::{CliError, CliResult};

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::info;

/// Initialize logger with fern
///
/// Logs go to stderr so command output on stdout stays clean.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Color the level on stderr (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: td_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter = log_level.0;

    let (output, colors): (Output, _) = match log_file {
        Some(ref path) => (open_log_file(path)?.into(), None),
        None => (std::io::stderr().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            out.finish(format_args!("{}", format_line(colors, message, record)))
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

/// One log line, shared by every output.
pub(crate) fn format_line(
    colors: Option<ColoredLevelConfig>,
    message: &std::fmt::Arguments,
    record: &log::Record,
) -> String {
    let level = match colors {
        Some(colors) => colors.color(record.level()).to_string(),
        None => record.level().to_string(),
    };
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339_seconds(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    )
}

pub(crate) fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_log_file(path: &Path) -> CliResult<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::logger(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logger(format!("Failed to open log file {}: {}", path.display(), e)))
}
