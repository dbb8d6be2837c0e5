use chrono::{DateTime, Utc};
use sidestep_domain::{DomainError, DomainRecord, RecordTable};

/// Result of one expiry sweep over the record table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    pub examined: usize,
    /// Disabled records that expired and were dropped.
    pub removed: Vec<String>,
    /// Expired, enabled, recently used domains that need a fresh lookup.
    pub refresh: Vec<String>,
}

/// Domain → record table plus the reverse IP → domain index.
///
/// Every method applies a whole-record update; readers never observe a
/// partially written record.
pub trait ResolutionStore: Send + Sync {
    fn get(&self, domain: &str) -> Option<DomainRecord>;

    /// Reverse lookup of an IP literal to the domain that last claimed it.
    fn domain_for_ip(&self, ip: &str) -> Option<String>;

    /// Points the reverse index at `domain` for `ip` (last writer wins).
    fn index_ip(&self, ip: &str, domain: &str);

    /// Stores a fresh resolution, creating the record if needed.
    fn upsert(&self, domain: &str, ip: &str, ttl_secs: u32) -> Result<DomainRecord, DomainError>;

    /// Records a top-level navigation through `domain`. False if unknown.
    fn mark_used(&self, domain: &str) -> bool;

    /// The flag setters return true only when the flag actually changed.
    fn disable(&self, domain: &str) -> bool;

    fn enable(&self, domain: &str) -> bool;

    fn set_force_https(&self, domain: &str) -> bool;

    fn sweep_expired(&self, now: DateTime<Utc>) -> SweepOutcome;

    fn snapshot(&self) -> RecordTable;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
