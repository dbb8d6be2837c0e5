use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use sidestep_application::ports::{Clock, DohTransport, RedirectTracker, ResolutionStore, SweepOutcome};
use sidestep_domain::{
    is_ip_literal, ChannelId, DohAnswer, DomainError, DomainRecord, RecordTable, RedirectEvent,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

pub fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

// ── Clock ─────────────────────────────────────────────────────────────────────

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::at(epoch())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ── Resolution store ──────────────────────────────────────────────────────────

pub struct MockResolutionStore {
    records: RwLock<HashMap<String, DomainRecord>>,
    reverse: RwLock<HashMap<String, String>>,
    clock: Arc<ManualClock>,
    upsert_count: AtomicU64,
}

impl MockResolutionStore {
    pub fn new(clock: Arc<ManualClock>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            reverse: RwLock::new(HashMap::new()),
            clock,
            upsert_count: AtomicU64::new(0),
        }
    }

    /// Inserts an enabled record valid for five minutes and indexes its IP.
    pub fn with_record(self, domain: &str, ip: &str) -> Self {
        self.insert_record(domain, DomainRecord::new(ip, 300, self.clock.now()));
        self
    }

    pub fn insert_record(&self, domain: &str, record: DomainRecord) {
        self.reverse
            .write()
            .unwrap()
            .insert(record.ip.clone(), domain.to_string());
        self.records
            .write()
            .unwrap()
            .insert(domain.to_string(), record);
    }

    pub fn upsert_count(&self) -> u64 {
        self.upsert_count.load(Ordering::Relaxed)
    }

    fn update<F: FnOnce(&mut DomainRecord) -> bool>(&self, domain: &str, f: F) -> bool {
        match self.records.write().unwrap().get_mut(domain) {
            Some(record) => f(record),
            None => false,
        }
    }
}

impl ResolutionStore for MockResolutionStore {
    fn get(&self, domain: &str) -> Option<DomainRecord> {
        self.records.read().unwrap().get(domain).cloned()
    }

    fn domain_for_ip(&self, ip: &str) -> Option<String> {
        self.reverse.read().unwrap().get(ip).cloned()
    }

    fn index_ip(&self, ip: &str, domain: &str) {
        self.reverse
            .write()
            .unwrap()
            .insert(ip.to_string(), domain.to_string());
    }

    fn upsert(&self, domain: &str, ip: &str, ttl_secs: u32) -> Result<DomainRecord, DomainError> {
        if !is_ip_literal(ip) {
            return Err(DomainError::InvalidIpAddress(ip.to_string()));
        }
        self.upsert_count.fetch_add(1, Ordering::Relaxed);
        let now = self.clock.now();
        let record = {
            let mut records = self.records.write().unwrap();
            let record = records
                .entry(domain.to_string())
                .and_modify(|r| r.refresh(ip, ttl_secs, now))
                .or_insert_with(|| DomainRecord::new(ip, ttl_secs, now));
            record.clone()
        };
        self.index_ip(ip, domain);
        Ok(record)
    }

    fn mark_used(&self, domain: &str) -> bool {
        let now = self.clock.now();
        self.update(domain, |r| {
            r.last_used_at = Some(now);
            true
        })
    }

    fn disable(&self, domain: &str) -> bool {
        self.update(domain, |r| !std::mem::replace(&mut r.disabled, true))
    }

    fn enable(&self, domain: &str) -> bool {
        self.update(domain, |r| std::mem::replace(&mut r.disabled, false))
    }

    fn set_force_https(&self, domain: &str) -> bool {
        self.update(domain, |r| !std::mem::replace(&mut r.force_https, true))
    }

    fn sweep_expired(&self, _now: DateTime<Utc>) -> SweepOutcome {
        SweepOutcome::default()
    }

    fn snapshot(&self) -> RecordTable {
        self.records
            .read()
            .unwrap()
            .iter()
            .map(|(domain, record)| (domain.clone(), record.clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

// ── Redirect tracker ──────────────────────────────────────────────────────────

pub struct MockRedirectTracker {
    events: Mutex<HashMap<ChannelId, RedirectEvent>>,
    clock: Arc<ManualClock>,
}

impl MockRedirectTracker {
    pub fn new(clock: Arc<ManualClock>) -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

impl RedirectTracker for MockRedirectTracker {
    fn record_redirect(
        &self,
        channel: ChannelId,
        source_url: &str,
        target_url: &str,
    ) -> Option<RedirectEvent> {
        let event = RedirectEvent::new(source_url, target_url, self.clock.now());
        self.events.lock().unwrap().insert(channel, event)
    }

    fn last_redirect(&self, channel: ChannelId) -> Option<RedirectEvent> {
        self.events.lock().unwrap().get(&channel).cloned()
    }
}

// ── DoH transport ─────────────────────────────────────────────────────────────

pub struct MockDohTransport {
    responses: tokio::sync::RwLock<HashMap<String, Vec<DohAnswer>>>,
    should_fail: tokio::sync::RwLock<bool>,
    call_count: AtomicU64,
}

impl MockDohTransport {
    pub fn new() -> Self {
        Self {
            responses: tokio::sync::RwLock::new(HashMap::new()),
            should_fail: tokio::sync::RwLock::new(false),
            call_count: AtomicU64::new(0),
        }
    }

    pub async fn set_answers(&self, domain: &str, answers: Vec<DohAnswer>) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), answers);
    }

    pub async fn set_address(&self, domain: &str, ip: &str, ttl: u32) {
        self.set_answers(domain, vec![DohAnswer::new(ip, ttl)]).await;
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DohTransport for MockDohTransport {
    async fn query(&self, domain: &str) -> Result<Vec<DohAnswer>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::lookup_failed(domain, "connection refused"));
        }
        Ok(self
            .responses
            .read()
            .await
            .get(domain)
            .cloned()
            .unwrap_or_default())
    }

    fn endpoint(&self) -> &str {
        "https://doh.test/resolve"
    }
}
