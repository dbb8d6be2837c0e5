use crate::di::Services;
use sidestep_domain::Config;
use sidestep_jobs::{JobRunner, StoreSweepJob};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Keeps the record table warm until Ctrl-C.
pub async fn run(config: &Config, services: &Services) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_store_sweep(
            StoreSweepJob::new(services.maintenance.clone())
                .with_interval(config.store.sweep_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    info!("Sidestep running, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received");
    shutdown.cancel();
    Ok(())
}
