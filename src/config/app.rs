// src/config/app.rs
use std::env;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::aliases::DbSecret;
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::crypto::CryptoCodec;
use crate::error::{ConfigError, MigrationError, MutexError};
use crate::lock::CronMutex;
use crate::migrate::VersionTable;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: Database,
    pub crypto: Crypto,
    pub locks: Locks,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Database {
    pub path: String,
    pub version_table: String,
}

/// Names where the secret lives; the secret itself never sits in the file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Crypto {
    pub secret_env: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Locks {
    pub dir: String,
    pub name: String,
}

impl Default for Database {
    fn default() -> Self {
        default_database()
    }
}

impl Default for Crypto {
    fn default() -> Self {
        default_crypto()
    }
}

impl Default for Locks {
    fn default() -> Self {
        default_locks()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once, falling back to defaults if the file is missing
pub fn load() -> Result<&'static Config, ConfigError> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path = env::var("APPT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        Config::from_path(&config_path)?
    } else {
        warn!("{config_path} not found, using built-in defaults");
        Config::default()
    };
    conf.apply_env_overrides();

    Ok(CONFIG.get_or_init(|| conf))
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `APPT_DATABASE` replaces the configured database path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("APPT_DATABASE") {
            self.database.path = path;
        }
    }

    /// The column secret, read from the configured environment variable
    pub fn secret(&self) -> Option<DbSecret> {
        env::var(&self.crypto.secret_env)
            .ok()
            .filter(|s| !s.is_empty())
            .map(DbSecret::new)
    }

    /// The process codec; without a secret every encrypted-column access fails
    pub fn codec(&self) -> CryptoCodec {
        match self.secret() {
            Some(secret) => CryptoCodec::new(&secret),
            None => CryptoCodec::unavailable(),
        }
    }

    pub fn version_table(&self) -> Result<VersionTable, MigrationError> {
        VersionTable::new(&self.database.version_table)
    }

    pub fn lock(&self) -> Result<CronMutex, MutexError> {
        CronMutex::in_dir(&self.locks.name, &self.locks.dir)
    }
}
