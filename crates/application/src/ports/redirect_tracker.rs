use sidestep_domain::{ChannelId, RedirectEvent};

/// Per-channel memory of the last redirect.
pub trait RedirectTracker: Send + Sync {
    /// Stores the redirect as the channel's latest and returns the one it replaced.
    fn record_redirect(
        &self,
        channel: ChannelId,
        source_url: &str,
        target_url: &str,
    ) -> Option<RedirectEvent>;

    fn last_redirect(&self, channel: ChannelId) -> Option<RedirectEvent>;
}
