//! # configs
//!
//! Layered settings for Share Nest: built-in defaults, then a `.env` file,
//! then `SHARE_NEST__*` environment variables (`__` separates sections, so
//! `SHARE_NEST__LOG__FORMAT=json` sets `log.format`).

use std::collections::HashMap;

use config::{Config, Environment};
use serde::Deserialize;
use sn_core::{IdGenerator, SequentialIdGenerator, UuidV7Generator};
use thiserror::Error;
use tracing::debug;

pub const ENV_PREFIX: &str = "SHARE_NEST";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub session: SessionSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub id_strategy: IdStrategy,
    /// Max items suggested for a request title
    pub suggestion_limit: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Uuid,
            suggestion_limit: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// UUID v7
    #[default]
    Uuid,
    /// Monotonic counter starting at 1
    Sequential,
}

impl IdStrategy {
    /// A fresh generator for this strategy.
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidV7Generator),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Inclusive
    pub score_min: u32,
    /// Exclusive
    pub score_max: u32,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            score_min: 50,
            score_max: 150,
        }
    }
}

impl AuthSettings {
    pub fn score_range(&self) -> std::ops::Range<u32> {
        self.score_min..self.score_max
    }
}

impl Settings {
    /// Loads `.env` (if present) and the process environment on top of the
    /// defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }
        let config = Config::builder().add_source(Self::environment()).build()?;
        Self::from_config(config)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    /// Like `load`, but reads `SHARE_NEST__*` keys from `vars` instead of the
    /// process environment and skips `.env`.
    pub fn from_env_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let config = Config::builder()
            .add_source(Self::environment().source(Some(map)))
            .build()?;
        Self::from_config(config)
    }

    /// Deserializes and validates an already-built `Config`.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.score_min >= self.auth.score_max {
            return Err(ConfigError::Invalid {
                key: "auth.score_min",
                reason: format!(
                    "must be below auth.score_max ({} >= {})",
                    self.auth.score_min, self.auth.score_max
                ),
            });
        }
        if self.session.suggestion_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "session.suggestion_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
