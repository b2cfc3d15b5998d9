use std::{env, str::FromStr};

use log::LevelFilter;

/// Environment variable holding the log level (`off`, `error`, `warn`,
/// `info`, `debug` or `trace`).
pub const LOG_LEVEL_ENV: &'static str = "METADSL_LOG";

/// Disables colored output when set to any value.
pub const NO_COLOR_ENV: &'static str = "NO_COLOR";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LevelFilter::Warn,
            color: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_vars(
            env::var(LOG_LEVEL_ENV).ok().as_deref(),
            env::var_os(NO_COLOR_ENV).is_some(),
        )
    }

    /// Unknown log levels fall back to the default level.
    pub fn from_vars(log_level: Option<&str>, no_color: bool) -> Config {
        let default = Config::default();
        let log_level = match log_level.map(LevelFilter::from_str) {
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                eprintln!(
                    "{}: unknown log level {:?}, using `{}`",
                    LOG_LEVEL_ENV,
                    log_level.unwrap_or_default(),
                    default.log_level
                );
                default.log_level
            }
            None => default.log_level,
        };

        Config {
            log_level,
            color: !no_color,
        }
    }
}
