use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RewriteConfig {
    /// Minimum gap between two automatic https → http retries of one URL
    #[serde(default = "default_error_retry_cooldown_secs")]
    pub error_retry_cooldown_secs: u64,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            error_retry_cooldown_secs: default_error_retry_cooldown_secs(),
        }
    }
}

fn default_error_retry_cooldown_secs() -> u64 {
    60
}
