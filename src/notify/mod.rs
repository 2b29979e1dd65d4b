//! Update notification sinks.

pub mod discord;
pub mod term;

use async_trait::async_trait;

use crate::error::NotifyError;

pub use discord::DiscordSink;
pub use term::TermSink;

/// Trait for update notification sinks (Discord, terminal, test doubles).
#[async_trait]
pub trait UpdateSink: Send + Sync {
    /// Get the name of this sink, for log lines.
    fn name(&self) -> &'static str;

    /// Deliver one update notification.
    async fn send(&self, site_name: &str, update_text: &str) -> Result<(), NotifyError>;
}

/// Format the announcement for a detected update.
#[must_use]
pub fn format_message(site_name: &str, update_text: &str) -> String {
    format!("New update on {site_name}: {update_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format_is_exact() {
        assert_eq!(
            format_message("Site 1", "Hello World"),
            "New update on Site 1: Hello World"
        );
    }

    #[test]
    fn test_message_format_keeps_empty_text() {
        assert_eq!(format_message("S", ""), "New update on S: ");
    }
}
