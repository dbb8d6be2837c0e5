use async_trait::async_trait;
use sidestep_domain::DomainError;

/// Outcome of a store sweep cycle.
#[derive(Debug, Default, Clone)]
pub struct SweepCycleOutcome {
    pub examined: usize,
    pub removed: usize,
    pub refresh_scheduled: usize,
    pub refreshed: usize,
    pub failed: usize,
    pub record_count: usize,
}

/// Port for periodic record table maintenance (expiry sweep + warm refresh).
#[async_trait]
pub trait StoreMaintenancePort: Send + Sync {
    async fn run_sweep_cycle(&self) -> Result<SweepCycleOutcome, DomainError>;
}
