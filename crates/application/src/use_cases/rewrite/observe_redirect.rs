use crate::ports::{RedirectTracker, ResolutionStore};
use sidestep_domain::{extract_host, is_ip_literal, is_secure, DomainError, OutboundRequest};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Use case: on-redirect-observed hook.
///
/// Disables a domain whose site bounces the channel through the same
/// redirect twice in a row, and learns `force_https` when a resolved IP
/// answers plain http with a redirect to https. Only top-level navigations
/// are tracked; sub-resource redirects never touch the channel's history.
pub struct ObserveRedirectUseCase {
    store: Arc<dyn ResolutionStore>,
    tracker: Arc<dyn RedirectTracker>,
}

impl ObserveRedirectUseCase {
    pub fn new(store: Arc<dyn ResolutionStore>, tracker: Arc<dyn RedirectTracker>) -> Self {
        Self { store, tracker }
    }

    /// Returns `CircularRedirect` when a loop was broken. The error is meant
    /// for the user; the engine keeps running.
    #[instrument(skip(self, source), fields(channel = %source.channel, source_url = %source.url))]
    pub fn execute(&self, source: &OutboundRequest, target_url: &str) -> Result<(), DomainError> {
        if !source.is_main_frame() {
            return Ok(());
        }

        let source_url = source.url.as_str();
        let previous = self
            .tracker
            .record_redirect(source.channel, source_url, target_url);

        let mut loop_broken = None;
        if previous.is_some_and(|prev| prev.same_hop(source_url, target_url)) {
            loop_broken = self.break_loop(source_url, target_url);
        }

        if !is_secure(source_url) && is_secure(target_url) {
            self.learn_force_https(source_url);
        }

        match loop_broken {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn break_loop(&self, source_url: &str, target_url: &str) -> Option<DomainError> {
        // an IP target is our own rewrite, not the site looping
        let domain = extract_host(target_url).filter(|host| !is_ip_literal(host))?;

        warn!(domain = %domain, "Detected circular redirect");
        match self.store.get(domain) {
            Some(record) if !record.disabled => {
                self.store.disable(domain);
                Some(DomainError::CircularRedirect {
                    domain: domain.to_string(),
                    from: source_url.to_string(),
                    to: target_url.to_string(),
                })
            }
            _ => None,
        }
    }

    fn learn_force_https(&self, source_url: &str) {
        let Some(ip) = extract_host(source_url) else {
            return;
        };
        if let Some(domain) = self.store.domain_for_ip(ip) {
            if self.store.set_force_https(&domain) {
                info!(domain = %domain, "Site redirects to https, keeping https from now on");
            }
        }
    }
}
