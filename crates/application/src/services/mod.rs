mod resolver_client;
mod retry_cooldown;

pub use resolver_client::{ResolvedAddress, ResolverClient};
pub use retry_cooldown::RetryCooldown;
