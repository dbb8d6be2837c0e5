use async_trait::async_trait;
use sidestep_domain::{DohAnswer, DomainError};

/// Remote DNS-over-HTTPS lookup service.
#[async_trait]
pub trait DohTransport: Send + Sync {
    /// Returns the answer set for `domain` in the order the resolver sent it.
    /// An empty answer set is not an error.
    async fn query(&self, domain: &str) -> Result<Vec<DohAnswer>, DomainError>;

    fn endpoint(&self) -> &str;
}
