use crate::ports::ResolutionStore;
use sidestep_domain::{extract_host, substitute_host, Directive, Header};
use std::sync::Arc;
use tracing::trace;

const REFERER: &str = "Referer";
const HOST: &str = "Host";

/// Use case: before-headers-sent hook for requests already addressed by IP.
///
/// Restores the logical domain in `Referer` (only when the referer points at
/// the same IP) and adds the `Host` header the origin expects.
pub struct PrepareHeadersUseCase {
    store: Arc<dyn ResolutionStore>,
}

impl PrepareHeadersUseCase {
    pub fn new(store: Arc<dyn ResolutionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, url: &str, mut headers: Vec<Header>) -> Directive {
        let Some(ip) = extract_host(url) else {
            return Directive::NoOp;
        };
        let Some(domain) = self.store.domain_for_ip(ip) else {
            return Directive::NoOp;
        };

        if let Some(referer) = headers.iter_mut().find(|h| h.is(REFERER)) {
            if extract_host(&referer.value) == Some(ip) {
                trace!(domain = %domain, "Restoring domain in Referer");
                referer.value = substitute_host(&referer.value, &domain);
            }
        }

        headers.push(Header::new(HOST, domain));
        Directive::ModifyHeaders { headers }
    }
}
