use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use sidestep_application::ports::{Clock, DohTransport, RecordPersistence};
use sidestep_domain::{DohAnswer, DomainError, RecordTable};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(epoch()),
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

/// Persistence that refuses every save.
pub struct FailingPersistence;

impl RecordPersistence for FailingPersistence {
    fn load(&self) -> Result<RecordTable, DomainError> {
        Err(DomainError::PersistenceUnavailable("disk gone".to_string()))
    }

    fn save(&self, _table: &RecordTable) -> Result<(), DomainError> {
        Err(DomainError::PersistenceUnavailable("disk gone".to_string()))
    }
}

pub struct MockDohTransport {
    responses: tokio::sync::RwLock<HashMap<String, Vec<DohAnswer>>>,
    call_count: AtomicU64,
}

impl MockDohTransport {
    pub fn new() -> Self {
        Self {
            responses: tokio::sync::RwLock::new(HashMap::new()),
            call_count: AtomicU64::new(0),
        }
    }

    pub async fn set_address(&self, domain: &str, ip: &str, ttl: u32) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), vec![DohAnswer::new(ip, ttl)]);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DohTransport for MockDohTransport {
    async fn query(&self, domain: &str) -> Result<Vec<DohAnswer>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match self.responses.read().await.get(domain) {
            Some(answers) => Ok(answers.clone()),
            None => Err(DomainError::lookup_failed(domain, "NXDOMAIN")),
        }
    }

    fn endpoint(&self) -> &str {
        "https://doh.test/resolve"
    }
}
