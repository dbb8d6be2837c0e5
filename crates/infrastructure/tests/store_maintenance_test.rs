mod helpers;

use chrono::Duration;
use helpers::{ManualClock, MockDohTransport};
use sidestep_application::ports::{Clock, ResolutionStore, StoreMaintenancePort};
use sidestep_application::services::ResolverClient;
use sidestep_application::ports::RecordPersistence;
use sidestep_infrastructure::repositories::{JsonFileRecordPersistence, MemoryRecordPersistence};
use sidestep_infrastructure::store::{DomainStore, StoreMaintenance};
use std::sync::Arc;
use tempfile::TempDir;

struct Fixture {
    store: Arc<DomainStore>,
    transport: Arc<MockDohTransport>,
    clock: Arc<ManualClock>,
    maintenance: StoreMaintenance,
}

fn fixture() -> Fixture {
    let clock = Arc::new(ManualClock::new());
    let store = Arc::new(DomainStore::load(
        Arc::new(MemoryRecordPersistence::new()),
        clock.clone(),
        Duration::days(7),
    ));
    let transport = Arc::new(MockDohTransport::new());
    let resolver = Arc::new(ResolverClient::new(transport.clone(), store.clone()));
    let maintenance = StoreMaintenance::new(store.clone(), resolver, clock.clone());
    Fixture {
        store,
        transport,
        clock,
        maintenance,
    }
}

#[tokio::test]
async fn test_empty_store_cycle() {
    let f = fixture();

    let outcome = f.maintenance.run_sweep_cycle().await.unwrap();

    assert_eq!(outcome.examined, 0);
    assert_eq!(outcome.refresh_scheduled, 0);
    assert_eq!(f.transport.call_count(), 0);
}

#[tokio::test]
async fn test_cycle_refreshes_warm_and_drops_disabled() {
    let f = fixture();
    f.store.upsert("warm.example", "1.1.1.1", 60).unwrap();
    f.store.mark_used("warm.example");
    f.store.upsert("off.example", "2.2.2.2", 60).unwrap();
    f.store.disable("off.example");
    f.store.upsert("idle.example", "3.3.3.3", 60).unwrap();
    f.transport.set_address("warm.example", "4.4.4.4", 300).await;

    f.clock.advance(Duration::minutes(5));
    let outcome = f.maintenance.run_sweep_cycle().await.unwrap();

    assert_eq!(outcome.examined, 3);
    assert_eq!(outcome.removed, 1);
    assert_eq!(outcome.refresh_scheduled, 1);
    assert_eq!(outcome.refreshed, 1);
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.record_count, 2);

    let warm = f.store.get("warm.example").unwrap();
    assert_eq!(warm.ip, "4.4.4.4");
    assert_eq!(warm.expires_at, f.clock.now() + Duration::seconds(300));
    assert_eq!(f.store.domain_for_ip("4.4.4.4").as_deref(), Some("warm.example"));
    assert!(f.store.get("off.example").is_none());
}

#[tokio::test]
async fn test_refresh_failure_is_counted_not_raised() {
    let f = fixture();
    f.store.upsert("gone.example", "1.1.1.1", 60).unwrap();
    f.store.mark_used("gone.example");

    f.clock.advance(Duration::minutes(5));
    let outcome = f.maintenance.run_sweep_cycle().await.unwrap();

    assert_eq!(outcome.refresh_scheduled, 1);
    assert_eq!(outcome.refreshed, 0);
    assert_eq!(outcome.failed, 1);
    // the stale record is left for the next access
    assert_eq!(f.store.get("gone.example").unwrap().ip, "1.1.1.1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_refresh_writes_record_file_from_spawned_tasks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hosts.json");
    let clock = Arc::new(ManualClock::new());
    let store = Arc::new(DomainStore::load(
        Arc::new(JsonFileRecordPersistence::new(&path)),
        clock.clone(),
        Duration::days(7),
    ));
    let transport = Arc::new(MockDohTransport::new());
    let resolver = Arc::new(ResolverClient::new(transport.clone(), store.clone()));
    let maintenance = StoreMaintenance::new(store.clone(), resolver, clock.clone());

    for (domain, ip) in [("a.example", "1.1.1.1"), ("b.example", "2.2.2.2")] {
        store.upsert(domain, ip, 60).unwrap();
        store.mark_used(domain);
    }
    transport.set_address("a.example", "5.5.5.5", 300).await;
    transport.set_address("b.example", "6.6.6.6", 300).await;

    clock.advance(Duration::minutes(5));
    let outcome = maintenance.run_sweep_cycle().await.unwrap();

    assert_eq!(outcome.refreshed, 2);
    let table = JsonFileRecordPersistence::new(&path).load().unwrap();
    assert_eq!(table["a.example"].ip, "5.5.5.5");
    assert_eq!(table["b.example"].ip, "6.6.6.6");
    assert!(table["a.example"].last_used_at.is_some());
}
