use chrono::serde::{ts_milliseconds, ts_milliseconds_option};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted mapping of domain → record. Ordered so a save is deterministic.
pub type RecordTable = BTreeMap<String, DomainRecord>;

/// Resolved address for a blocked domain, plus the flags the rewrite engine
/// learns about it over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub ip: String,

    /// Record is stale after this instant.
    #[serde(rename = "expires", with = "ts_milliseconds")]
    pub expires_at: DateTime<Utc>,

    /// Last successful resolution.
    #[serde(rename = "updated", with = "ts_milliseconds")]
    pub updated_at: DateTime<Utc>,

    /// Last top-level navigation through this record.
    #[serde(
        rename = "lastUsed",
        default,
        with = "ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_used_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub force_https: bool,
}

impl DomainRecord {
    pub fn new(ip: impl Into<String>, ttl_secs: u32, now: DateTime<Utc>) -> Self {
        Self {
            ip: ip.into(),
            expires_at: now + Duration::seconds(i64::from(ttl_secs)),
            updated_at: now,
            last_used_at: None,
            disabled: false,
            force_https: false,
        }
    }

    /// Applies a fresh resolution, keeping the learned flags.
    pub fn refresh(&mut self, ip: impl Into<String>, ttl_secs: u32, now: DateTime<Utc>) {
        self.ip = ip.into();
        self.expires_at = now + Duration::seconds(i64::from(ttl_secs));
        self.updated_at = now;
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    pub fn used_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.last_used_at
            .is_some_and(|last_used| last_used > now - window)
    }
}
