use async_trait::async_trait;
use futures::future::join_all;
use sidestep_application::ports::{
    Clock, ResolutionStore, StoreMaintenancePort, SweepCycleOutcome, SweepOutcome,
};
use sidestep_application::services::ResolverClient;
use sidestep_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, info};

/// Infrastructure adapter implementing `StoreMaintenancePort`.
///
/// Sweeps expired records, then re-resolves the recently used ones so they
/// stay warm. Each refresh runs as its own task; failures are only counted.
pub struct StoreMaintenance {
    store: Arc<dyn ResolutionStore>,
    resolver: Arc<ResolverClient>,
    clock: Arc<dyn Clock>,
}

impl StoreMaintenance {
    pub fn new(
        store: Arc<dyn ResolutionStore>,
        resolver: Arc<ResolverClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            resolver,
            clock,
        }
    }

    async fn refresh_all(&self, domains: Vec<String>) -> (usize, usize) {
        let tasks = domains.into_iter().map(|domain| {
            let resolver = Arc::clone(&self.resolver);
            tokio::spawn(async move {
                let result = resolver.resolve(&domain).await;
                (domain, result)
            })
        });

        let mut refreshed = 0;
        let mut failed = 0;
        for joined in join_all(tasks).await {
            match joined {
                Ok((_, Ok(_))) => refreshed += 1,
                Ok((domain, Err(e))) => {
                    debug!(domain = %domain, error = %e, "Record refresh failed");
                    failed += 1;
                }
                Err(e) => {
                    debug!(error = %e, "Refresh task panicked");
                    failed += 1;
                }
            }
        }
        (refreshed, failed)
    }
}

#[async_trait]
impl StoreMaintenancePort for StoreMaintenance {
    async fn run_sweep_cycle(&self) -> Result<SweepCycleOutcome, DomainError> {
        let now = self.clock.now();

        let store = Arc::clone(&self.store);
        let sweep = match tokio::task::spawn_blocking(move || store.sweep_expired(now)).await {
            Ok(sweep) => sweep,
            Err(e) => {
                debug!(error = %e, "Sweep task panicked");
                SweepOutcome::default()
            }
        };

        let removed = sweep.removed.len();
        for domain in &sweep.removed {
            info!(domain = %domain, "Expired disabled record removed");
        }

        let refresh_scheduled = sweep.refresh.len();
        let (refreshed, failed) = if refresh_scheduled == 0 {
            (0, 0)
        } else {
            self.refresh_all(sweep.refresh).await
        };

        Ok(SweepCycleOutcome {
            examined: sweep.examined,
            removed,
            refresh_scheduled,
            refreshed,
            failed,
            record_count: self.store.len(),
        })
    }
}
