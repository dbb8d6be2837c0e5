use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

const PRUNE_THRESHOLD: usize = 1024;

/// Per-URL gate for automatic retries: one claim per URL per cooldown window.
pub struct RetryCooldown {
    cooldown: Duration,
    last_retry: DashMap<String, DateTime<Utc>, FxBuildHasher>,
}

impl RetryCooldown {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_retry: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Returns true and starts a new window if `url` has not been retried
    /// within the cooldown.
    pub fn try_claim(&self, url: &str, now: DateTime<Utc>) -> bool {
        if self.last_retry.len() > PRUNE_THRESHOLD {
            self.prune(now);
        }

        match self.last_retry.entry(url.to_string()) {
            Entry::Occupied(mut entry) => {
                if *entry.get() >= now - self.cooldown {
                    return false;
                }
                entry.insert(now);
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                true
            }
        }
    }

    pub fn prune(&self, now: DateTime<Utc>) {
        let horizon = now - self.cooldown;
        self.last_retry.retain(|_, last| *last >= horizon);
    }

    pub fn len(&self) -> usize {
        self.last_retry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_retry.is_empty()
    }
}
