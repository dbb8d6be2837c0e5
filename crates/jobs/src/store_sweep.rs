use sidestep_application::ports::StoreMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Periodic expiry sweep of the record table. The first cycle runs as soon
/// as the job starts.
pub struct StoreSweepJob {
    maintenance: Arc<dyn StoreMaintenancePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StoreSweepJob {
    pub fn new(maintenance: Arc<dyn StoreMaintenancePort>) -> Self {
        Self {
            maintenance,
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting store sweep job"
        );

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(job.interval_secs));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("StoreSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match job.maintenance.run_sweep_cycle().await {
                            Ok(outcome) => {
                                if outcome.removed > 0 || outcome.refresh_scheduled > 0 {
                                    info!(
                                        examined = outcome.examined,
                                        removed = outcome.removed,
                                        refreshed = outcome.refreshed,
                                        failed = outcome.failed,
                                        records = outcome.record_count,
                                        "Store sweep cycle completed"
                                    );
                                }
                            }
                            Err(e) => {
                                error!(error = %e, "Store sweep cycle failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
