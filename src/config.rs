//! Process configuration
//!
//! Parsed from command-line flags, with environment fallbacks.

use clap::Parser;
use std::path::PathBuf;

/// Default snapshot file, relative to the current directory
pub const DEFAULT_DB_PATH: &str = ".wkn";

/// Default log filter when neither `RUST_LOG` nor `--log-level` is set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// wkn configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "wkn")]
#[command(version, about = "Interactive store of named integer arrays")]
pub struct Config {
    /// Path to the database file
    #[arg(long = "db-path", env = "WKN_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Log filter (error, warn, info, debug, trace or a tracing directive)
    #[arg(long, env = "WKN_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["wkn"]).unwrap();
        assert_eq!(config.db_path, PathBuf::from(".wkn"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_db_path_flag() {
        let config = Config::try_parse_from(["wkn", "--db-path", "/tmp/arrays.wkn"]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/arrays.wkn"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Config::try_parse_from(["wkn", "--port", "6379"]).is_err());
    }
}
