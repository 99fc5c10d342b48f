//! Server configuration from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so either source works.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_CARD_LIST_LIMIT: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Directory served for every non-API path.
    pub static_dir: PathBuf,
    /// Maximum number of cards returned by the list endpoint.
    pub card_list_limit: i64,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// `Missing` when `DATABASE_URL` is unset, `Invalid` when a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, one variable name at a time.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let card_list_limit = env_parse(&lookup, "CARD_LIST_LIMIT", DEFAULT_CARD_LIST_LIMIT)?;
        if card_list_limit <= 0 {
            return Err(ConfigError::Invalid { var: "CARD_LIST_LIMIT", value: card_list_limit.to_string() });
        }
        Ok(Self {
            database_url,
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            db_max_connections: env_parse(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            static_dir: lookup("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
            card_list_limit,
        })
    }
}

fn env_parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
