use crate::ports::{RedirectTracker, ResolutionStore};
use crate::services::ResolverClient;
use sidestep_domain::{
    downgrade_scheme, extract_host, is_ip_literal, is_secure, substitute_host, ChannelId,
    Directive, DomainError,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// What asked for the unblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnblockTrigger {
    /// The page looked like a block notice. Domains the user turned off stay off.
    BlockedPageDetected,
    /// Explicit user action. Re-enables a disabled domain.
    User,
}

/// Use case: move a channel from a blocked domain page to the same page
/// served through the domain's resolved IP.
pub struct UnblockChannelUseCase {
    store: Arc<dyn ResolutionStore>,
    tracker: Arc<dyn RedirectTracker>,
    resolver: Arc<ResolverClient>,
}

impl UnblockChannelUseCase {
    pub fn new(
        store: Arc<dyn ResolutionStore>,
        tracker: Arc<dyn RedirectTracker>,
        resolver: Arc<ResolverClient>,
    ) -> Self {
        Self {
            store,
            tracker,
            resolver,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        channel: ChannelId,
        url: &str,
        trigger: UnblockTrigger,
    ) -> Result<Directive, DomainError> {
        let target_url = self.intended_url(channel, url);

        let domain = extract_host(&target_url)
            .ok_or_else(|| DomainError::MalformedUrl(target_url.clone()))?
            .to_string();
        if is_ip_literal(&domain) {
            return Ok(Directive::NoOp);
        }

        if trigger == UnblockTrigger::BlockedPageDetected
            && self.store.get(&domain).is_some_and(|record| record.disabled)
        {
            debug!(domain = %domain, "Domain disabled by user, leaving blocked");
            return Ok(Directive::NoOp);
        }

        let ip = self.resolver.ensure(&domain).await?;

        if self.store.get(&domain).is_some_and(|record| record.disabled) {
            self.store.enable(&domain);
        }
        let force_https = self
            .store
            .get(&domain)
            .is_some_and(|record| record.force_https);

        let mut next_url = substitute_host(&target_url, &ip);
        if is_secure(&next_url) && !force_https {
            next_url = downgrade_scheme(&next_url);
        }

        info!(domain = %domain, ip = %ip, url = %next_url, "Unblocking channel");
        Ok(Directive::navigate(channel, next_url))
    }

    /// When the channel just got redirected onto `url`, the page the user
    /// actually asked for is the redirect's source.
    fn intended_url(&self, channel: ChannelId, url: &str) -> String {
        match self.tracker.last_redirect(channel) {
            Some(event) if event.target_url == url => event.source_url,
            _ => url.to_string(),
        }
    }
}
