//! Layered configuration: defaults, then `trellis.toml`, then `TRELLIS_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use trellis_validator::ValidatorConfig;

pub const DEFAULT_CONFIG_FILE: &str = "trellis.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: trellis_log::Config,
    pub validator: ValidatorConfig,
}

impl AppConfig {
    /// Load configuration. An explicit `path` must exist; the default file
    /// is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => {
                anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
                path.to_path_buf()
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Self::figment(&file)
            .extract::<Self>()
            .with_context(|| format!("invalid configuration in {}", file.display()))
            .map(|mut config| {
                config.log.apply_env();
                config
            })
    }

    fn figment(file: &Path) -> Figment {
        // TRELLIS_LOG and TRELLIS_LOG_FORMAT belong to the logger and are
        // applied separately.
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(
                Env::prefixed("TRELLIS_")
                    .ignore(&["log", "log_format", "config"])
                    .split("__"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "trellis.toml",
                r#"
                [log]
                level = "debug"
                format = "json"

                [validator]
                bail = true

                [validator.messages]
                required = "Fill in :attribute."
                "#,
            )?;

            let config: AppConfig = AppConfig::figment(Path::new("trellis.toml")).extract()?;
            assert_eq!(config.log.level, "debug");
            assert_eq!(config.log.format, trellis_log::Format::Json);
            assert!(config.validator.bail);
            assert_eq!(config.validator.messages["required"], "Fill in :attribute.");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("trellis.toml", "[validator]\nbail = false\n")?;
            jail.set_env("TRELLIS_VALIDATOR__BAIL", "true");
            jail.set_env("TRELLIS_LOG", "trace");

            let config: AppConfig = AppConfig::figment(Path::new("trellis.toml")).extract()?;
            assert!(config.validator.bail);
            assert_eq!(config.log.level, trellis_log::Config::default().level);
            Ok(())
        });
    }

    #[test]
    fn missing_default_file_is_fine() {
        figment::Jail::expect_with(|_| {
            let config: AppConfig = AppConfig::figment(Path::new("trellis.toml")).extract()?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
