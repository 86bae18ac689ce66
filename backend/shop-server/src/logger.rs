use crate::error::{Result as ServerErrorResult, ServerError};

use shop_config::LogLevel;

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go
enum LogTarget {
    File(PathBuf),
    ColoredStdout,
    /// systemd, docker logs
    PlainStdout,
}

/// Install the global fern logger.
///
/// `log_file` wins over stdout; `colored` only matters for stdout. Must run
/// before anything else logs.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let target = match log_file {
        Some(path) => LogTarget::File(path),
        None if colored => LogTarget::ColoredStdout,
        None => LogTarget::PlainStdout,
    };

    let output = match target {
        LogTarget::File(ref path) => {
            let file = fern::log_file(path).map_err(|source| ServerError::LogFile {
                path: path.clone(),
                source,
            })?;
            Dispatch::new().format(plain_line).chain(file)
        }
        LogTarget::ColoredStdout => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}:{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        colors.color(record.level()),
                        message,
                        record.file().unwrap_or("unknown"),
                        record.line().unwrap_or(0),
                    ))
                })
                .chain(std::io::stdout())
        }
        LogTarget::PlainStdout => Dispatch::new().format(plain_line).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(log_level.0)
        // hyper is chatty at debug and says nothing about our requests
        .level_for("hyper", LevelFilter::Warn)
        .chain(output)
        .apply()?;

    match target {
        LogTarget::File(ref path) => {
            info!("Logging at {} to {}", log_level, path.display())
        }
        LogTarget::ColoredStdout | LogTarget::PlainStdout => {
            info!("Logging at {} to stdout", log_level)
        }
    }

    Ok(())
}

fn plain_line(out: FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.level(),
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
