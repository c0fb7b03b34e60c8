//! TOML-based configuration for sqlchain.
//!
//! Supports a config file (sqlchain.toml) holding the four run options.
//!
//! Example configuration:
//! ```toml
//! prefix = "app_"
//! engine = "InnoDB"
//! charset = "utf8mb4"
//! filename = "./migrations/schema.sql"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options read by the serializer and the output sink.
///
/// Set before any table operation; the builder never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Prepended to every table name.
    pub prefix: String,

    /// Storage engine, emitted as ` ENGINE=<value>` on CREATE only.
    pub engine: String,

    /// Character set, emitted as ` DEFAULT CHARSET=<value>` on CREATE only.
    pub charset: String,

    /// Output path. Empty means echo instead of write.
    pub filename: String,
}

impl ChainConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table name prefix.
    pub fn prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.prefix = prefix.as_ref().trim().to_string();
        self
    }

    /// Set the storage engine.
    pub fn engine(mut self, engine: impl AsRef<str>) -> Self {
        self.engine = engine.as_ref().trim().to_string();
        self
    }

    /// Set the default character set.
    pub fn charset(mut self, charset: impl AsRef<str>) -> Self {
        self.charset = charset.as_ref().trim().to_string();
        self
    }

    /// Set the output file path.
    pub fn filename(mut self, filename: impl AsRef<str>) -> Self {
        self.filename = filename.as_ref().trim().to_string();
        self
    }

    /// Apply a batch of key/value options. Unrecognized keys are ignored.
    pub fn register<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in params {
            self = match key.as_ref() {
                "prefix" => self.prefix(value),
                "engine" => self.engine(value),
                "charset" => self.charset(value),
                "filename" => self.filename(value),
                _ => self,
            };
        }
        self
    }

    /// The ` ENGINE=...` clause, or empty.
    pub fn engine_clause(&self) -> String {
        if self.engine.is_empty() {
            String::new()
        } else {
            format!(" ENGINE={}", self.engine)
        }
    }

    /// The ` DEFAULT CHARSET=...` clause, or empty.
    pub fn charset_clause(&self) -> String {
        if self.charset.is_empty() {
            String::new()
        } else {
            format!(" DEFAULT CHARSET={}", self.charset)
        }
    }

    /// The configured output path, if any.
    pub fn output_path(&self) -> Option<PathBuf> {
        if self.filename.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.filename))
        }
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: ChainConfig = toml::from_str(&content)?;
        // Route through the setters so file values are trimmed like the rest.
        Ok(ChainConfig::new().register(config.as_pairs()))
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SQLCHAIN_CONFIG`
    /// 2. `./sqlchain.toml`
    /// 3. `~/.config/sqlchain/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("SQLCHAIN_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("sqlchain.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sqlchain").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(ChainConfig::default())
    }

    fn as_pairs(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            ("prefix", self.prefix.clone()),
            ("engine", self.engine.clone()),
            ("charset", self.charset.clone()),
            ("filename", self.filename.clone()),
        ])
    }
}
