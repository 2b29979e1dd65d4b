//! Discord channel notification sink.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::ChannelId;
use serenity::builder::CreateMessage;
use serenity::cache::Cache;
use serenity::http::Http;
use tracing::debug;

use crate::error::NotifyError;
use crate::notify::{format_message, UpdateSink};

/// Sends update announcements to one fixed Discord channel.
///
/// The cache and HTTP handles come from the gateway context once the
/// session reports ready; the sink never manages the connection itself.
pub struct DiscordSink {
    cache: Arc<Cache>,
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordSink {
    #[must_use]
    pub fn new(cache: Arc<Cache>, http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self {
            cache,
            http,
            channel_id,
        }
    }
}

#[async_trait]
impl UpdateSink for DiscordSink {
    fn name(&self) -> &'static str {
        "discord"
    }

    async fn send(&self, site_name: &str, update_text: &str) -> Result<(), NotifyError> {
        // Resolve the target against the live channel cache, not the API.
        // A stale or wrong id means the message is dropped, not retried.
        if self.cache.channel(self.channel_id).is_none() {
            return Err(NotifyError::UnknownChannel(self.channel_id));
        }

        let message = CreateMessage::new().content(format_message(site_name, update_text));
        self.channel_id.send_message(&self.http, message).await?;

        debug!(channel = %self.channel_id, site = site_name, "Notification sent");
        Ok(())
    }
}
