//! Discord client wiring.
//!
//! The gateway session is owned entirely by serenity; this module only
//! hands the poller a sink once the session reports ready. Polling
//! never starts before the bot is connected, and an invalid token is
//! the one fatal failure mode.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use serenity::all::{ChannelId, GatewayIntents, Ready};
use serenity::async_trait;
use serenity::prelude::{Client, Context, EventHandler};
use tracing::{debug, error, info};

use crate::config::WatchConfig;
use crate::fetch::HttpFetcher;
use crate::notify::DiscordSink;
use crate::poller::Poller;

struct Handler {
    config: WatchConfig,
    started: AtomicBool,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.tag(),
            guilds = ready.guilds.len(),
            "Logged in"
        );

        // Ready fires again after a gateway reconnect; only the first
        // one starts the poll loop.
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Session resumed, poll loop already running");
            return;
        }

        let sink = DiscordSink::new(
            Arc::clone(&ctx.cache),
            Arc::clone(&ctx.http),
            ChannelId::new(self.config.channel_id),
        );
        let poller = Poller::new(
            self.config.sites.clone(),
            Arc::new(HttpFetcher::new()),
            Arc::new(sink),
        );
        let interval = self.config.interval();

        tokio::spawn(poller.run(interval));
    }
}

/// Connect to Discord and poll until shutdown.
///
/// Runs the gateway client and installs a Ctrl-C handler that shuts the
/// shards down cleanly.
pub async fn run(config: WatchConfig, token: &str) -> Result<()> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler {
        config,
        started: AtomicBool::new(false),
    };

    let mut client = Client::builder(token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Received shutdown signal");
        shard_manager.shutdown_all().await;
    });

    client.start().await?;
    Ok(())
}
