//! Watch web pages for content changes and announce them to Discord.
//!
//! This crate polls a fixed list of sites on a timer. For each site it
//! fetches the page, extracts one text fragment via a CSS selector,
//! compares it with the last-observed fragment, and on a change sends
//! `New update on {site}: {text}` to a configured Discord channel.
//!
//! # Architecture
//!
//! - [`config`] loads and validates the site list from a TOML file
//! - [`fetch`] defines the [`PageSource`] seam and the reqwest-backed fetcher
//! - [`extract`] turns HTML + selector into a trimmed text fragment
//! - [`notify`] defines the [`UpdateSink`] seam and the Discord/terminal sinks
//! - [`poller`] owns the last-seen state and runs the tick loop
//! - [`bot`] wires the serenity session and starts polling once the
//!   gateway reports ready

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod poller;

pub use config::{SiteConfig, WatchConfig};
pub use error::{ConfigError, ExtractError, FetchError, NotifyError};
pub use fetch::{HttpFetcher, PageSource};
pub use notify::{DiscordSink, TermSink, UpdateSink};
pub use poller::{Poller, TickSummary};
