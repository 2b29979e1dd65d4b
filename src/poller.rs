//! The poll/compare/notify loop.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::SiteConfig;
use crate::extract;
use crate::fetch::PageSource;
use crate::notify::UpdateSink;

/// Key for the last-seen map.
///
/// Keyed by site name plus selector, so two sites configured with an
/// identical selector string track their fragments independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SiteKey {
    site: String,
    selector: String,
}

impl SiteKey {
    fn for_site(site: &SiteConfig) -> Self {
        Self {
            site: site.name.clone(),
            selector: site.selector.clone(),
        }
    }
}

/// Outcome of one tick, for the per-tick log line and for tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// Sites processed this tick.
    pub sites: usize,
    /// Sites skipped because the fetch failed.
    pub failed: usize,
    /// Sites whose fragment differed from the last observation.
    pub changed: usize,
    /// Notifications actually delivered.
    pub notified: usize,
}

/// Polls the configured sites and announces detected changes.
///
/// The poller owns all mutable state: the last-seen fragment per site.
/// State lives in memory only and starts empty, so the first
/// observation of every site counts as a change and is announced.
pub struct Poller {
    sites: Vec<SiteConfig>,
    source: Arc<dyn PageSource>,
    sink: Arc<dyn UpdateSink>,
    last_seen: HashMap<SiteKey, String>,
}

impl Poller {
    #[must_use]
    pub fn new(sites: Vec<SiteConfig>, source: Arc<dyn PageSource>, sink: Arc<dyn UpdateSink>) -> Self {
        Self {
            sites,
            source,
            sink,
            last_seen: HashMap::new(),
        }
    }

    /// Run ticks forever, sleeping `interval` between them.
    ///
    /// Each tick is awaited to completion before the interval sleep
    /// starts, so ticks never overlap: a slow site stretches the cycle
    /// instead of piling up concurrent runs.
    pub async fn run(mut self, interval: Duration) {
        info!(
            sites = self.sites.len(),
            interval = ?interval,
            sink = self.sink.name(),
            "Starting poll loop"
        );

        loop {
            let summary = self.run_tick().await;
            debug!(
                failed = summary.failed,
                changed = summary.changed,
                notified = summary.notified,
                "Tick complete"
            );
            tokio::time::sleep(interval).await;
        }
    }

    /// Run one poll cycle over all sites, in configuration order.
    ///
    /// Sites are fetched sequentially. A failed fetch logs and skips
    /// that site for this tick; no extraction or notification happens
    /// for it. A failed send is logged and the message dropped; the
    /// stored fragment is updated either way, so a dropped announcement
    /// is not re-sent on the next tick.
    pub async fn run_tick(&mut self) -> TickSummary {
        let mut summary = TickSummary {
            sites: self.sites.len(),
            ..TickSummary::default()
        };

        for site in &self.sites {
            let html = match self.source.fetch(&site.url).await {
                Ok(html) => html,
                Err(e) => {
                    error!(site = %site.name, url = %site.url, error = %e, "Fetch failed, skipping site this tick");
                    summary.failed += 1;
                    continue;
                }
            };

            let update_text = match extract::extract_text(&html, &site.selector) {
                Ok(text) => text,
                Err(e) => {
                    // Selectors are validated at config load; this only
                    // fires if that validation was bypassed.
                    error!(site = %site.name, error = %e, "Extraction failed, skipping site this tick");
                    summary.failed += 1;
                    continue;
                }
            };

            let key = SiteKey::for_site(site);
            let changed = self.last_seen.get(&key) != Some(&update_text);
            if !changed {
                debug!(site = %site.name, "No change");
                continue;
            }

            summary.changed += 1;
            self.last_seen.insert(key, update_text.clone());

            match self.sink.send(&site.name, &update_text).await {
                Ok(()) => {
                    info!(site = %site.name, sink = self.sink.name(), "Update announced");
                    summary.notified += 1;
                }
                Err(e) => {
                    error!(site = %site.name, sink = self.sink.name(), error = %e, "Failed to deliver notification");
                }
            }
        }

        summary
    }
}
