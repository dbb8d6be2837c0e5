use crate::ports::ResolutionStore;
use sidestep_domain::{
    downgrade_scheme, extract_host, is_secure, substitute_host, Directive, OutboundRequest,
};
use std::sync::Arc;
use tracing::debug;

/// Use case: before-request hook. Swaps a known domain for its resolved IP.
pub struct RewriteRequestUseCase {
    store: Arc<dyn ResolutionStore>,
}

impl RewriteRequestUseCase {
    pub fn new(store: Arc<dyn ResolutionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, request: &OutboundRequest) -> Directive {
        let Some(domain) = extract_host(&request.url) else {
            return Directive::NoOp;
        };

        let record = match self.store.get(domain) {
            Some(record) if !record.disabled => record,
            _ => return Directive::NoOp,
        };

        self.store.index_ip(&record.ip, domain);
        if request.is_main_frame() {
            self.store.mark_used(domain);
        }

        let mut redirect_url = substitute_host(&request.url, &record.ip);
        if is_secure(&redirect_url) && !record.force_https {
            debug!(domain = %domain, "Trying plain http first");
            redirect_url = downgrade_scheme(&redirect_url);
        }

        debug!(
            channel = %request.channel,
            from = %request.url,
            to = %redirect_url,
            "Redirecting request to resolved address"
        );

        Directive::redirect(redirect_url)
    }
}
