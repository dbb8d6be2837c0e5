use sidestep_application::ports::{Clock, RecordPersistence, StoreMaintenancePort};
use sidestep_application::services::{ResolverClient, RetryCooldown};
use sidestep_domain::Config;
use sidestep_infrastructure::doh::DohJsonTransport;
use sidestep_infrastructure::redirect::ChannelRedirectTracker;
use sidestep_infrastructure::repositories::{JsonFileRecordPersistence, MemoryRecordPersistence};
use sidestep_infrastructure::store::{DomainStore, StoreMaintenance};
use sidestep_infrastructure::system::SystemClock;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const MAX_WINDOW_SECS: u64 = i32::MAX as u64;

pub struct Services {
    pub clock: Arc<dyn Clock>,
    pub store: Arc<DomainStore>,
    pub tracker: Arc<ChannelRedirectTracker>,
    pub resolver: Arc<ResolverClient>,
    pub retry_cooldown: Arc<RetryCooldown>,
    pub maintenance: Arc<dyn StoreMaintenancePort>,
}

impl Services {
    pub fn new(config: &Config, ephemeral: bool) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let persistence: Arc<dyn RecordPersistence> = if ephemeral {
            info!("Running with in-memory record table");
            Arc::new(MemoryRecordPersistence::new())
        } else {
            info!(path = %config.store.path, "Using record file");
            Arc::new(JsonFileRecordPersistence::new(&config.store.path))
        };

        let store = Arc::new(DomainStore::load(
            persistence,
            clock.clone(),
            seconds(config.store.recent_use_window_secs),
        ));

        let transport = Arc::new(DohJsonTransport::new(
            config.resolver.endpoint.clone(),
            Duration::from_secs(config.resolver.timeout_secs),
        )?);
        let resolver = Arc::new(ResolverClient::new(transport, store.clone()));

        let maintenance: Arc<dyn StoreMaintenancePort> = Arc::new(StoreMaintenance::new(
            store.clone(),
            resolver.clone(),
            clock.clone(),
        ));

        Ok(Self {
            tracker: Arc::new(ChannelRedirectTracker::new(clock.clone())),
            retry_cooldown: Arc::new(RetryCooldown::new(seconds(
                config.rewrite.error_retry_cooldown_secs,
            ))),
            clock,
            store,
            resolver,
            maintenance,
        })
    }
}

fn seconds(secs: u64) -> chrono::Duration {
    chrono::Duration::seconds(secs.min(MAX_WINDOW_SECS) as i64)
}
