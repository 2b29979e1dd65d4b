//! Configuration loading and validation.
//!
//! The watcher is configured once at startup from a TOML file:
//!
//! ```toml
//! interval_ms = 60000
//! channel_id = 123456789012345678
//!
//! [[sites]]
//! name = "Example"
//! url = "https://example.com"
//! selector = "#latest-update"
//! ```
//!
//! The bot token is deliberately not part of the file; it is read from
//! the `DISCORD_TOKEN` environment variable by the CLI.

use std::path::Path;
use std::time::Duration;

use scraper::Selector;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default poll interval: one minute.
const DEFAULT_INTERVAL_MS: u64 = 60_000;

/// One watched site.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Display label used in notifications.
    pub name: String,
    /// Absolute URL to fetch.
    pub url: String,
    /// CSS selector locating the fragment to watch.
    pub selector: String,
}

/// Process-wide watcher configuration, fixed for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Poll interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Discord channel that receives update notifications.
    pub channel_id: u64,
    /// Sites to watch, processed in this order every tick.
    pub sites: Vec<SiteConfig>,
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

impl WatchConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// Validation is fail-fast: an empty site list, a relative or
    /// malformed URL, a selector that does not parse, or a zero channel
    /// id all reject the whole file before any polling starts.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The poll interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::NoSites);
        }

        if self.channel_id == 0 {
            return Err(ConfigError::InvalidChannel);
        }

        for site in &self.sites {
            reqwest::Url::parse(&site.url).map_err(|e| ConfigError::InvalidUrl {
                site: site.name.clone(),
                url: site.url.clone(),
                reason: e.to_string(),
            })?;

            if Selector::parse(&site.selector).is_err() {
                return Err(ConfigError::InvalidSelector {
                    site: site.name.clone(),
                    selector: site.selector.clone(),
                });
            }
        }

        Ok(())
    }
}
