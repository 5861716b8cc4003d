use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Public GWOSC service root.
pub const DEFAULT_HOST: &str = "https://www.gw-openscience.org";

/// Largest GPS time accepted by the archive; used as an open upper bound.
pub const MAX_GPS: u64 = 99_999_999_999;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const HOST_ENV: &str = "GWOSC_HOST";
pub const TIMEOUT_ENV: &str = "GWOSC_TIMEOUT_SECS";

/// Client configuration.
///
/// Deserializes from JSON with every field optional:
/// `{"host": "https://gwosc.example", "timeout_secs": 10}`.
/// A zero timeout is rejected on every load path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    pub host: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    host: String,
    timeout_secs: u64,
    user_agent: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        let Config {
            host,
            timeout_secs,
            user_agent,
        } = Config::default();
        Self {
            host,
            timeout_secs,
            user_agent,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let config = Self {
            host: raw.host,
            timeout_secs: raw.timeout_secs,
            user_agent: raw.user_agent,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `GWOSC_HOST` and `GWOSC_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout_secs = raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("{TIMEOUT_ENV}={raw:?}: {e}")))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// A zero timeout makes every fetch fail, which the resolver would
    /// report as a missing event.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Whole seconds, never below one.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Transport timeout, at least one second even for a hand-built `Config`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
