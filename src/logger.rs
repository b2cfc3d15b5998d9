use std::io;

use colored::{Color, ColoredString, Colorize};
use log::{Level, SetLoggerError};

use crate::config::Config;

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Blue,
        Level::Debug => Color::Magenta,
        Level::Trace => Color::Green,
    }
}

/// Installs a stderr logger that prefixes every line with its level, e.g.
/// `debug: infer Optional.some -> Optional[Integer]`.
///
/// Fails if a global logger was already installed.
pub fn init(config: &Config) -> Result<(), SetLoggerError> {
    if !config.color {
        colored::control::set_override(false);
    }

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();
            out.finish(format_args!(
                "{} {}",
                ColoredString::from((level.to_string().to_lowercase() + ":").as_str())
                    .color(level_color(level))
                    .to_string(),
                message
            ))
        })
        .level(config.log_level)
        .chain(io::stderr())
        .apply()
}

/// Same as `init` with the configuration read from the environment.
pub fn init_from_env() -> Result<(), SetLoggerError> {
    init(&Config::from_env())
}
