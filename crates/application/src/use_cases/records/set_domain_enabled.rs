use crate::ports::ResolutionStore;
use sidestep_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case: operator enables or disables automatic unblocking of a domain.
pub struct SetDomainEnabledUseCase {
    store: Arc<dyn ResolutionStore>,
}

impl SetDomainEnabledUseCase {
    pub fn new(store: Arc<dyn ResolutionStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, domain: &str, enabled: bool) -> Result<(), DomainError> {
        let changed = if enabled {
            self.store.enable(domain)
        } else {
            self.store.disable(domain)
        };

        if !changed && self.store.get(domain).is_none() {
            return Err(DomainError::NotFound(domain.to_string()));
        }

        info!(enabled, changed, "Domain state updated");
        Ok(())
    }
}
