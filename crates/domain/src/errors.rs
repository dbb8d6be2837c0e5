use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Lookup failed for {domain}: {reason}")]
    LookupFailed { domain: String, reason: String },

    #[error("Circular redirect on {domain}: {from} redirects back to {to}")]
    CircularRedirect {
        domain: String,
        from: String,
        to: String,
    },

    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Domain not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn lookup_failed(domain: &str, reason: impl Into<String>) -> Self {
        Self::LookupFailed {
            domain: domain.to_string(),
            reason: reason.into(),
        }
    }
}
