use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use sidestep_application::ports::{Clock, RedirectTracker};
use sidestep_domain::{ChannelId, RedirectEvent};
use std::sync::Arc;
use tracing::debug;

/// Last redirect per channel. Entries are overwritten, never expired: a
/// closed channel just leaves a harmless stale event behind.
pub struct ChannelRedirectTracker {
    events: DashMap<ChannelId, RedirectEvent, FxBuildHasher>,
    clock: Arc<dyn Clock>,
}

impl ChannelRedirectTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            events: DashMap::with_hasher(FxBuildHasher),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl RedirectTracker for ChannelRedirectTracker {
    fn record_redirect(
        &self,
        channel: ChannelId,
        source_url: &str,
        target_url: &str,
    ) -> Option<RedirectEvent> {
        debug!(channel = %channel, from = %source_url, to = %target_url, "Redirect observed");
        let event = RedirectEvent::new(source_url, target_url, self.clock.now());
        self.events.insert(channel, event)
    }

    fn last_redirect(&self, channel: ChannelId) -> Option<RedirectEvent> {
        self.events.get(&channel).map(|event| event.value().clone())
    }
}
