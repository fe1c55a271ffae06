//! CLI argument definitions for the Clerk binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Clerk — a rule-based shopping assistant for the command line.
#[derive(Parser, Debug)]
#[command(name = "clerk", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Data directory for the session database.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Session key; reusing the same key resumes the active session.
    #[arg(short = 's', long = "session-key", default_value = "local")]
    pub session_key: String,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CLERK_CONFIG env var > ~/.clerk/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CLERK_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level, falling back to the config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        if let Some(ref level) = self.log_level {
            return level.clone();
        }
        if let Ok(level) = std::env::var("CLERK_LOG") {
            return level;
        }
        config_level.to_string()
    }

    /// Resolve the data directory, expanding a leading `~`.
    pub fn resolve_data_dir(&self, config_dir: &str) -> PathBuf {
        if let Some(ref d) = self.data_dir {
            return d.clone();
        }
        expand_home(config_dir)
    }
}

fn default_config_path() -> PathBuf {
    expand_home("~/.clerk").join("config.toml")
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if path == "~" || path.starts_with("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let rest = path.trim_start_matches('~').trim_start_matches('/');
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_passthrough() {
        assert_eq!(expand_home("/var/lib/clerk"), PathBuf::from("/var/lib/clerk"));
        assert_eq!(expand_home("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn test_expand_home_tilde() {
        let expanded = expand_home("~/.clerk");
        assert!(expanded.to_string_lossy().ends_with(".clerk"));
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_flag_overrides_config_level() {
        let args = CliArgs {
            config: None,
            data_dir: None,
            log_level: Some("debug".into()),
            session_key: "local".into(),
        };
        assert_eq!(args.resolve_log_level("info"), "debug");
    }
}
