//! Error types for the watcher.

use serenity::all::ChannelId;
use thiserror::Error;

/// Errors raised while loading or validating the configuration file.
///
/// These are the only errors that terminate the process; everything
/// else is logged and recovered per site per tick.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the expected schema
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The site list is empty
    #[error("no sites configured")]
    NoSites,

    /// A site URL is not an absolute URL
    #[error("site '{site}' has an invalid url '{url}': {reason}")]
    InvalidUrl {
        site: String,
        url: String,
        reason: String,
    },

    /// A site selector does not parse as a CSS selector
    #[error("site '{site}' has an invalid selector '{selector}'")]
    InvalidSelector { site: String, selector: String },

    /// The notification channel id is missing or zero
    #[error("channel_id must be a nonzero Discord channel id")]
    InvalidChannel,
}

/// Errors raised while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Errors raised while extracting text from a page.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The selector string does not parse as a CSS selector
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}

/// Errors raised while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The configured channel is not present in the bot's cache
    #[error("channel {0} not found in the bot's channel cache")]
    UnknownChannel(ChannelId),

    /// Discord API or transport failure during send
    #[error("Discord send failed: {0}")]
    Discord(#[from] serenity::Error),
}
