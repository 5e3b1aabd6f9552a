//! Settings file parsing.
//!
//! The service reads an optional TOML file; every key is optional and
//! command-line flags override whatever the file provides.
//!
//! ```toml
//! capacity = 5
//! random_api_url = "http://www.randomnumberapi.com/api/v1.0/random"
//! random_timeout_secs = 5
//! blacklist = ["badword", "test"]
//! host = "127.0.0.1"
//! port = 3000
//! ```

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CAPACITY: usize = 5;
pub const DEFAULT_RANDOM_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid settings file: {0}")]
    Parse(String),

    #[error("Capacity must be greater than zero")]
    ZeroCapacity,
}

/// Contents of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub capacity: Option<usize>,
    pub random_api_url: Option<String>,
    pub random_timeout_secs: Option<u64>,
    pub blacklist: Option<Vec<String>>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub fn parse_settings(content: &str) -> Result<SettingsFile, SettingsError> {
    toml::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
}

/// Reject a zero capacity, which would turn every request away.
pub fn check_capacity(capacity: usize) -> Result<usize, SettingsError> {
    if capacity == 0 {
        Err(SettingsError::ZeroCapacity)
    } else {
        Ok(capacity)
    }
}
