use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use sidestep_application::ports::{Clock, RecordPersistence, ResolutionStore, SweepOutcome};
use sidestep_domain::{is_ip_literal, DomainError, DomainRecord, RecordTable};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Concurrent domain → record table with its reverse IP → domain index.
///
/// Each operation updates one record under its shard lock. Durable changes are
/// merged into the persisted table record by record, so several processes can
/// share one file; save failures are logged and the in-memory state stays
/// authoritative.
pub struct DomainStore {
    records: DashMap<String, DomainRecord, FxBuildHasher>,
    reverse: DashMap<String, String, FxBuildHasher>,
    clock: Arc<dyn Clock>,
    persistence: Arc<dyn RecordPersistence>,
    recent_use_window: Duration,
    save_lock: Mutex<()>,
}

impl DomainStore {
    /// Builds the store from whatever the persistence port holds.
    pub fn load(
        persistence: Arc<dyn RecordPersistence>,
        clock: Arc<dyn Clock>,
        recent_use_window: Duration,
    ) -> Self {
        let store = Self {
            records: DashMap::with_hasher(FxBuildHasher),
            reverse: DashMap::with_hasher(FxBuildHasher),
            clock,
            persistence,
            recent_use_window,
            save_lock: Mutex::new(()),
        };

        match store.persistence.load() {
            Ok(table) => store.restore(table),
            Err(e) => warn!(error = %e, "Could not load record table, starting empty"),
        }

        store
    }

    fn restore(&self, table: RecordTable) {
        let mut skipped = 0usize;
        for (domain, record) in table {
            if !is_ip_literal(&record.ip) {
                warn!(domain = %domain, ip = %record.ip, "Dropping persisted record with invalid IP");
                skipped += 1;
                continue;
            }
            self.reverse.insert(record.ip.clone(), domain.clone());
            self.records.insert(domain, record);
        }

        info!(
            records = self.records.len(),
            skipped, "Record table loaded"
        );
    }

    /// Re-reads the durable table under the save lock, applies `edit` to it,
    /// mirrors the touched domains back into memory and saves. Records this
    /// store did not touch are written back as the last writer left them, so
    /// a second process sharing the file does not lose its changes.
    fn write_through(&self, touched: &[&str], edit: impl FnOnce(&mut RecordTable)) {
        let _guard = self.save_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut table = match self.persistence.load() {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "Record table unreadable, saving in-memory state");
                self.snapshot()
            }
        };

        edit(&mut table);
        for domain in touched {
            self.adopt(domain, table.get_mut(*domain));
        }

        if let Err(e) = self.persistence.save(&table) {
            warn!(error = %e, "Record table not saved, keeping in-memory state");
        }
    }

    /// Makes the live record match its durable version. The later
    /// `last_used_at` of the two wins on both sides.
    fn adopt(&self, domain: &str, durable: Option<&mut DomainRecord>) {
        let Some(durable) = durable else {
            if let Some((_, removed)) = self.records.remove(domain) {
                self.unindex(&removed.ip, domain);
            }
            return;
        };

        let (reindex, previous_ip) = match self.records.entry(domain.to_string()) {
            Entry::Occupied(mut entry) => {
                let live = entry.get_mut();
                durable.last_used_at = durable.last_used_at.max(live.last_used_at);
                let previous_ip = (live.ip != durable.ip).then(|| live.ip.clone());
                *live = durable.clone();
                (previous_ip.is_some(), previous_ip)
            }
            Entry::Vacant(entry) => {
                entry.insert(durable.clone());
                (true, None)
            }
        };

        if let Some(previous_ip) = previous_ip {
            self.unindex(&previous_ip, domain);
        }
        if reindex {
            self.reverse.insert(durable.ip.clone(), domain.to_string());
        }
    }

    fn unindex(&self, ip: &str, domain: &str) {
        self.reverse.remove_if(ip, |_, owner| owner == domain);
    }

    /// Applies `update` to the live record and, when it reports a change, to
    /// the durable one.
    fn update_flag(&self, domain: &str, update: impl Fn(&mut DomainRecord) -> bool) -> bool {
        let live = {
            let Some(mut record) = self.records.get_mut(domain) else {
                return false;
            };
            if !update(record.value_mut()) {
                return false;
            }
            record.value().clone()
        };

        self.write_through(&[domain], |table| match table.get_mut(domain) {
            Some(durable) => {
                update(durable);
            }
            None => {
                table.insert(domain.to_string(), live);
            }
        });
        true
    }
}

impl ResolutionStore for DomainStore {
    fn get(&self, domain: &str) -> Option<DomainRecord> {
        self.records.get(domain).map(|record| record.value().clone())
    }

    fn domain_for_ip(&self, ip: &str) -> Option<String> {
        self.reverse.get(ip).map(|domain| domain.value().clone())
    }

    fn index_ip(&self, ip: &str, domain: &str) {
        if self.reverse.get(ip).is_some_and(|current| current.value() == domain) {
            return;
        }
        self.reverse.insert(ip.to_string(), domain.to_string());
    }

    fn upsert(&self, domain: &str, ip: &str, ttl_secs: u32) -> Result<DomainRecord, DomainError> {
        if !is_ip_literal(ip) {
            return Err(DomainError::InvalidIpAddress(ip.to_string()));
        }

        let now = self.clock.now();
        self.write_through(&[domain], |table| {
            table
                .entry(domain.to_string())
                .and_modify(|record| record.refresh(ip, ttl_secs, now))
                .or_insert_with(|| DomainRecord::new(ip, ttl_secs, now));
        });
        self.reverse.insert(ip.to_string(), domain.to_string());

        debug!(domain = %domain, ip = %ip, ttl = ttl_secs, "Record stored");
        self.get(domain)
            .ok_or_else(|| DomainError::NotFound(domain.to_string()))
    }

    fn mark_used(&self, domain: &str) -> bool {
        let now = self.clock.now();
        self.records
            .get_mut(domain)
            .map(|mut record| record.last_used_at = Some(now))
            .is_some()
    }

    fn disable(&self, domain: &str) -> bool {
        self.update_flag(domain, |record| !std::mem::replace(&mut record.disabled, true))
    }

    fn enable(&self, domain: &str) -> bool {
        self.update_flag(domain, |record| std::mem::replace(&mut record.disabled, false))
    }

    fn set_force_https(&self, domain: &str) -> bool {
        self.update_flag(domain, |record| {
            !std::mem::replace(&mut record.force_https, true)
        })
    }

    fn sweep_expired(&self, now: DateTime<Utc>) -> SweepOutcome {
        // work on a copy so live traffic is never blocked by the sweep
        let snapshot = self.snapshot();
        let mut outcome = SweepOutcome {
            examined: snapshot.len(),
            ..Default::default()
        };

        for (domain, record) in snapshot {
            if !record.is_expired_at(now) {
                continue;
            }

            if record.disabled {
                let removed = self.records.remove_if(&domain, |_, current| {
                    current.disabled && current.is_expired_at(now)
                });
                if let Some((_, removed)) = removed {
                    self.unindex(&removed.ip, &domain);
                    outcome.removed.push(domain);
                }
            } else if record.used_within(self.recent_use_window, now) {
                outcome.refresh.push(domain);
            }
        }

        if !outcome.removed.is_empty() {
            let touched: Vec<&str> = outcome.removed.iter().map(String::as_str).collect();
            self.write_through(&touched, |table| {
                for domain in &touched {
                    if table
                        .get(*domain)
                        .is_some_and(|record| record.disabled && record.is_expired_at(now))
                    {
                        table.remove(*domain);
                    }
                }
            });
            // another writer may have re-enabled or refreshed it meanwhile
            outcome.removed.retain(|domain| !self.records.contains_key(domain));
        }

        debug!(
            examined = outcome.examined,
            removed = outcome.removed.len(),
            refresh = outcome.refresh.len(),
            "Expiry sweep finished"
        );
        outcome
    }

    fn snapshot(&self) -> RecordTable {
        self.records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
