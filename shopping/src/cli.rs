use std::{fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use list_store::IdPolicy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to load from the configuration file")]
    FailedToLoadConfig,

    #[error("Invalid configuration file: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "shopping",
    version,
    about = "keep a shopping list in the terminal"
)]
pub struct Arguments {
    #[arg(long)]
    pub id_policy: Option<IdPolicyArg>,

    #[arg(long)]
    pub log_level: Option<String>,

    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum IdPolicyArg {
    Length,
    Monotonic,
}

impl From<IdPolicyArg> for IdPolicy {
    fn from(value: IdPolicyArg) -> Self {
        match value {
            IdPolicyArg::Length => IdPolicy::Length,
            IdPolicyArg::Monotonic => IdPolicy::Monotonic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub id_policy: IdPolicy,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::Length,
            log_level: "info".into(),
            log_dir: "logs".into(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str::<Config>(content)?)
    }
}

impl Arguments {
    pub fn from_with_config() -> Result<Config, CliError> {
        Arguments::parse().into_config()
    }

    /// Flags win over the file, the file wins over the defaults.
    pub fn into_config(self) -> Result<Config, CliError> {
        let file_config = if let Some(path) = self.config.as_ref() {
            let content = fs::read_to_string(path).map_err(|_| CliError::FailedToLoadConfig)?;
            Config::from_toml(&content)?
        } else {
            Config::default()
        };

        Ok(Config {
            id_policy: self
                .id_policy
                .map(IdPolicy::from)
                .unwrap_or(file_config.id_policy),
            log_level: self.log_level.unwrap_or(file_config.log_level),
            log_dir: self.log_dir.unwrap_or(file_config.log_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Arguments {
        Arguments::try_parse_from(std::iter::once("shopping").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_without_flags() {
        let config = parse(&[]).into_config().expect("config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["--id-policy", "monotonic", "--log-level", "debug"])
            .into_config()
            .expect("config");

        assert_eq!(config.id_policy, IdPolicy::Monotonic);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml("id_policy = \"monotonic\"").expect("config");

        assert_eq!(config.id_policy, IdPolicy::Monotonic);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn unknown_policy_in_toml_is_rejected() {
        let result = Config::from_toml("id_policy = \"random\"");
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn missing_config_file_fails() {
        let result = parse(&["--config", "does/not/exist.toml"]).into_config();
        assert!(matches!(result, Err(CliError::FailedToLoadConfig)));
    }

    #[test]
    fn unknown_policy_flag_is_rejected() {
        let result = Arguments::try_parse_from(["shopping", "--id-policy", "random"]);
        assert!(result.is_err());
    }
}
