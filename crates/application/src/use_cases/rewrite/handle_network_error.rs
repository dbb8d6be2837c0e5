use crate::ports::Clock;
use crate::services::RetryCooldown;
use sidestep_domain::{downgrade_scheme, extract_host, is_ip_literal, is_secure, Directive, OutboundRequest};
use std::sync::Arc;
use tracing::info;

/// Use case: on-error hook. Retries a failed https page once over plain http,
/// at most once per URL per cooldown window. Sub-resource failures are left
/// to the page.
pub struct HandleNetworkErrorUseCase {
    cooldown: Arc<RetryCooldown>,
    clock: Arc<dyn Clock>,
}

impl HandleNetworkErrorUseCase {
    pub fn new(cooldown: Arc<RetryCooldown>, clock: Arc<dyn Clock>) -> Self {
        Self { cooldown, clock }
    }

    pub fn execute(&self, request: &OutboundRequest) -> Directive {
        let url = request.url.as_str();
        if !request.is_main_frame() || !is_secure(url) {
            return Directive::NoOp;
        }
        match extract_host(url) {
            Some(host) if !is_ip_literal(host) => {}
            _ => return Directive::NoOp,
        }
        if !self.cooldown.try_claim(url, self.clock.now()) {
            return Directive::NoOp;
        }

        info!(channel = %request.channel, url = %url, "Retrying failed page over http");
        Directive::navigate(request.channel, downgrade_scheme(url))
    }
}
