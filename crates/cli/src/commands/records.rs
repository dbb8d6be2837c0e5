use crate::di::{Services, UseCases};
use sidestep_application::ports::{ResolutionStore, StoreMaintenancePort};

pub async fn resolve(services: &Services, domain: &str) -> anyhow::Result<()> {
    let resolved = services.resolver.resolve(domain).await?;
    println!("{} {} (ttl {}s)", domain, resolved.ip, resolved.ttl_secs);
    Ok(())
}

pub fn list(use_cases: &UseCases, json: bool) -> anyhow::Result<()> {
    let table = use_cases.list_records.execute();

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if table.is_empty() {
        println!("No records");
        return Ok(());
    }

    println!(
        "{:<32} {:<15} {:<25} {:<9} {}",
        "DOMAIN", "IP", "EXPIRES", "STATE", "HTTPS"
    );
    for (domain, record) in &table {
        println!(
            "{:<32} {:<15} {:<25} {:<9} {}",
            domain,
            record.ip,
            record.expires_at.format("%Y-%m-%d %H:%M:%S UTC"),
            if record.disabled { "disabled" } else { "enabled" },
            if record.force_https { "forced" } else { "-" },
        );
    }
    Ok(())
}

pub fn set_enabled(use_cases: &UseCases, domain: &str, enabled: bool) -> anyhow::Result<()> {
    use_cases.set_domain_enabled.execute(domain, enabled)?;
    println!(
        "{} {}",
        domain,
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub async fn sweep(services: &Services) -> anyhow::Result<()> {
    let outcome = services.maintenance.run_sweep_cycle().await?;
    println!(
        "examined {}, removed {}, refreshed {}/{} ({} failed), {} records",
        outcome.examined,
        outcome.removed,
        outcome.refreshed,
        outcome.refresh_scheduled,
        outcome.failed,
        services.store.len()
    );
    Ok(())
}
