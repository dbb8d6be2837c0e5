use crate::ports::ResolutionStore;
use sidestep_domain::{extract_host, is_ip_literal, ToggleState};
use std::sync::Arc;

/// Use case: which state the unblock affordance shows for a displayed URL.
pub struct GetToggleStateUseCase {
    store: Arc<dyn ResolutionStore>,
}

impl GetToggleStateUseCase {
    pub fn new(store: Arc<dyn ResolutionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, url: &str) -> ToggleState {
        let is_web = url
            .get(..4)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http"));
        if !is_web {
            return ToggleState::Inactive;
        }

        let Some(host) = extract_host(url) else {
            return ToggleState::Inactive;
        };
        if !is_ip_literal(host) {
            return ToggleState::Blocked;
        }

        let record = self
            .store
            .domain_for_ip(host)
            .and_then(|domain| self.store.get(&domain));
        match record {
            Some(record) if record.disabled => ToggleState::Blocked,
            Some(_) => ToggleState::Unblocked,
            None => ToggleState::Inactive,
        }
    }
}
