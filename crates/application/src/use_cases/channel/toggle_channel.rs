use super::{ReblockChannelUseCase, UnblockChannelUseCase, UnblockTrigger};
use sidestep_domain::{extract_host, is_ip_literal, ChannelId, Directive, DomainError};
use std::sync::Arc;

/// Use case: the user clicked the unblock affordance for a channel.
pub struct ToggleChannelUseCase {
    unblock: Arc<UnblockChannelUseCase>,
    reblock: Arc<ReblockChannelUseCase>,
}

impl ToggleChannelUseCase {
    pub fn new(unblock: Arc<UnblockChannelUseCase>, reblock: Arc<ReblockChannelUseCase>) -> Self {
        Self { unblock, reblock }
    }

    pub async fn execute(&self, channel: ChannelId, url: &str) -> Result<Directive, DomainError> {
        match extract_host(url) {
            Some(host) if is_ip_literal(host) => Ok(self.reblock.execute(channel, url)),
            _ => {
                self.unblock
                    .execute(channel, url, UnblockTrigger::User)
                    .await
            }
        }
    }
}
