use crate::LogLevel;

use serde::Deserialize;

/// Where and how the server logs.
///
/// `dir` is resolved against the config directory and must stay inside it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Ignored when logging to a file
    pub colored: bool,
    pub dir: String,
    /// `None` logs to stdout
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            dir: "log".to_string(),
            file: None,
        }
    }
}
