use chrono::{DateTime, Utc};

/// Last redirect observed on a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEvent {
    pub source_url: String,
    pub target_url: String,
    pub observed_at: DateTime<Utc>,
}

impl RedirectEvent {
    pub fn new(
        source_url: impl Into<String>,
        target_url: impl Into<String>,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            target_url: target_url.into(),
            observed_at,
        }
    }

    pub fn same_hop(&self, source_url: &str, target_url: &str) -> bool {
        self.source_url == source_url && self.target_url == target_url
    }
}
