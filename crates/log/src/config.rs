//! Configuration types and presets

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Logging configuration
///
/// Deserializes from the `[log]` table of `trellis.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives (e.g., "info", "trellis_form=debug,warn")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: Format::Compact,
            display: DisplayConfig::default(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable with colors and indentation
    Pretty,
    /// Compact single-line output
    Compact,
    /// Structured JSON output
    Json,
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(LogError::Format(other.to_owned())),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show source location (file:line)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Use ANSI colors
    pub colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            source: false,
            target: true,
            thread_ids: false,
            colors: true,
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// `TRELLIS_LOG` (or `RUST_LOG`) sets the filter and `TRELLIS_LOG_FORMAT`
    /// the format. Unknown formats fall back to compact.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through
    /// `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        config.apply_lookup(lookup);
        config
    }

    /// Override fields that are set in the environment.
    pub fn apply_env(&mut self) {
        self.apply_lookup(|key| std::env::var(key).ok());
    }

    fn apply_lookup(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("TRELLIS_LOG").or_else(|| lookup("RUST_LOG")) {
            self.level = level;
        }

        if let Some(format) = lookup("TRELLIS_LOG_FORMAT") {
            self.format = format.parse().unwrap_or(Format::Compact);
        }

        if lookup("NO_COLOR").is_some() {
            self.display.colors = false;
        }
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            display: DisplayConfig {
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_env_is_default() {
        assert_eq!(Config::from_lookup(env(&[])), Config::default());
    }

    #[test]
    fn trellis_log_wins_over_rust_log() {
        let config = Config::from_lookup(env(&[("TRELLIS_LOG", "debug"), ("RUST_LOG", "trace")]));
        assert_eq!(config.level, "debug");

        let config = Config::from_lookup(env(&[("RUST_LOG", "trace")]));
        assert_eq!(config.level, "trace");
    }

    #[rstest]
    #[case("json", Format::Json)]
    #[case("PRETTY", Format::Pretty)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn format_from_env(#[case] value: &str, #[case] expected: Format) {
        let config = Config::from_lookup(env(&[("TRELLIS_LOG_FORMAT", value)]));
        assert_eq!(config.format, expected);
    }

    #[test]
    fn no_color_disables_colors() {
        let config = Config::from_lookup(env(&[("NO_COLOR", "1")]));
        assert!(!config.display.colors);
    }

    #[test]
    fn unknown_format_is_an_error_when_parsed_directly() {
        let err = "xml".parse::<Format>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log format 'xml'");
    }

    #[test]
    fn presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
    }
}
