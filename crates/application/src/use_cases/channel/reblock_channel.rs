use crate::ports::ResolutionStore;
use sidestep_domain::{extract_host, is_ip_literal, substitute_host, ChannelId, Directive};
use std::sync::Arc;
use tracing::info;

/// Use case: turn the unblocker off for the IP-addressed page a channel shows.
pub struct ReblockChannelUseCase {
    store: Arc<dyn ResolutionStore>,
}

impl ReblockChannelUseCase {
    pub fn new(store: Arc<dyn ResolutionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, channel: ChannelId, url: &str) -> Directive {
        let Some(ip) = extract_host(url).filter(|host| is_ip_literal(host)) else {
            return Directive::NoOp;
        };
        let Some(domain) = self.store.domain_for_ip(ip) else {
            return Directive::NoOp;
        };

        self.store.disable(&domain);
        info!(domain = %domain, "Unblocker disabled for domain");

        Directive::navigate(channel, substitute_host(url, &domain))
    }
}
