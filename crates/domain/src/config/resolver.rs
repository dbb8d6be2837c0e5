use serde::{Deserialize, Serialize};

/// DNS-over-HTTPS JSON endpoint used for out-of-band lookups.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-lookup timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://dns.google/resolve".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
