use sidestep_domain::{is_ip_literal, DomainError};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{DohTransport, ResolutionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub ip: String,
    pub ttl_secs: u32,
}

/// Out-of-band lookup of a domain's address, written through to the store.
///
/// Concurrent lookups for the same domain are not coalesced: both hit the
/// resolver and the last upsert wins.
pub struct ResolverClient {
    transport: Arc<dyn DohTransport>,
    store: Arc<dyn ResolutionStore>,
}

impl ResolverClient {
    pub fn new(transport: Arc<dyn DohTransport>, store: Arc<dyn ResolutionStore>) -> Self {
        Self { transport, store }
    }

    /// Looks `domain` up and stores the first IP-literal answer.
    #[instrument(skip(self))]
    pub async fn resolve(&self, domain: &str) -> Result<ResolvedAddress, DomainError> {
        debug!(endpoint = %self.transport.endpoint(), "Resolving domain");

        let answers = self.transport.query(domain).await.map_err(|e| {
            warn!(error = %e, "DoH lookup failed");
            match e {
                DomainError::LookupFailed { .. } => e,
                other => DomainError::lookup_failed(domain, other.to_string()),
            }
        })?;

        // CNAMEs and other record types may precede the address
        let answer = answers
            .into_iter()
            .find(|answer| is_ip_literal(&answer.data))
            .ok_or_else(|| {
                warn!("No IPv4 address in DoH answer");
                DomainError::lookup_failed(domain, "no IPv4 address in answer")
            })?;

        // the store writes its file through, keep that off the async workers
        let store = Arc::clone(&self.store);
        let (owned_domain, ip, ttl) = (domain.to_string(), answer.data.clone(), answer.ttl);
        tokio::task::spawn_blocking(move || store.upsert(&owned_domain, &ip, ttl))
            .await
            .map_err(|e| DomainError::PersistenceUnavailable(format!("store task failed: {e}")))??;

        info!(ip = %answer.data, ttl = answer.ttl, "Domain resolved");

        Ok(ResolvedAddress {
            ip: answer.data,
            ttl_secs: answer.ttl,
        })
    }

    /// Read-through: a stored record is returned as is, stale or not.
    pub async fn ensure(&self, domain: &str) -> Result<String, DomainError> {
        if let Some(record) = self.store.get(domain) {
            return Ok(record.ip);
        }
        Ok(self.resolve(domain).await?.ip)
    }
}
