//! Terminal sink for the `check` subcommand.

use async_trait::async_trait;
use colored::Colorize;

use crate::error::NotifyError;
use crate::notify::UpdateSink;

/// Prints updates to stdout instead of sending them anywhere.
pub struct TermSink;

#[async_trait]
impl UpdateSink for TermSink {
    fn name(&self) -> &'static str {
        "term"
    }

    async fn send(&self, site_name: &str, update_text: &str) -> Result<(), NotifyError> {
        println!("{} {}", site_name.green().bold(), update_text);
        Ok(())
    }
}
