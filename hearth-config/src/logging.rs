use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, ThreadLogMode};

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: LevelFilter,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::Info,
            threads: true,
            color: true,
            timestamp: true,
        }
    }
}

/// Installs a terminal logger shaped by `config`.
///
/// Does nothing when logging is disabled. Fails if a logger was already installed.
pub fn init_logger(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    if !config.enabled {
        return Ok(());
    }

    let mut builder = ConfigBuilder::new();
    if config.timestamp {
        let _ = builder.set_time_format_rfc3339();
        builder.set_time_level(LevelFilter::Error);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }
    if config.threads {
        builder.set_thread_level(LevelFilter::Info);
        builder.set_thread_mode(ThreadLogMode::Both);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }

    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    TermLogger::init(config.level, builder.build(), TerminalMode::Mixed, color)
}
