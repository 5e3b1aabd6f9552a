use crate::prelude::*;
use labs_core::settings::{
    check_capacity, parse_settings, SettingsFile, DEFAULT_CAPACITY, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_RANDOM_TIMEOUT_SECS,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options shared by every command that runs the pipeline.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PipelineOptions {
    /// Settings file (TOML). Command-line flags take precedence over it
    #[arg(long, env = "LABS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Random-number service URL (e.g. http://www.randomnumberapi.com/api/v1.0/random)
    #[arg(long, env = "LABS_RANDOM_API_URL")]
    pub random_api_url: Option<String>,

    /// Timeout in seconds for the random-number service (default: 5)
    #[arg(long, env = "LABS_RANDOM_TIMEOUT")]
    pub random_timeout: Option<u64>,

    /// Comma-separated list of blacklisted words
    #[arg(long, env = "LABS_BLACKLIST", value_delimiter = ',')]
    pub blacklist: Option<Vec<String>>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub capacity: Option<usize>,
    pub random_api_url: Option<String>,
    pub random_timeout_secs: Option<u64>,
    pub blacklist: Option<Vec<String>>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl From<&PipelineOptions> for Overrides {
    fn from(options: &PipelineOptions) -> Self {
        Self {
            random_api_url: options.random_api_url.clone(),
            random_timeout_secs: options.random_timeout,
            blacklist: options.blacklist.clone(),
            ..Self::default()
        }
    }
}

/// Fully resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub capacity: usize,
    pub random_api_url: Option<String>,
    pub random_timeout: Duration,
    pub blacklist: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_settings(SettingsFile::default())
    }
}

impl ServiceConfig {
    /// Load the optional settings file, then apply overrides and defaults.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, Error> {
        let settings = match path {
            Some(path) => read_settings(path)?,
            None => SettingsFile::default(),
        };

        Self::from_settings(settings).with_overrides(overrides).checked()
    }

    pub fn from_settings(settings: SettingsFile) -> Self {
        Self {
            capacity: settings.capacity.unwrap_or(DEFAULT_CAPACITY),
            random_api_url: settings.random_api_url.filter(|url| !url.trim().is_empty()),
            random_timeout: Duration::from_secs(
                settings
                    .random_timeout_secs
                    .unwrap_or(DEFAULT_RANDOM_TIMEOUT_SECS),
            ),
            blacklist: settings.blacklist.unwrap_or_default(),
            host: settings.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: settings.port.unwrap_or(DEFAULT_PORT),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(capacity) = overrides.capacity {
            self.capacity = capacity;
        }
        if let Some(url) = overrides.random_api_url {
            self.random_api_url = Some(url).filter(|url| !url.trim().is_empty());
        }
        if let Some(secs) = overrides.random_timeout_secs {
            self.random_timeout = Duration::from_secs(secs);
        }
        if let Some(blacklist) = overrides.blacklist {
            self.blacklist = blacklist;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        self
    }

    fn checked(self) -> Result<Self, Error> {
        check_capacity(self.capacity)?;
        Ok(self)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_settings(path: &Path) -> Result<SettingsFile, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::SettingsRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(parse_settings(&content)?)
}
