use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// JSON file holding the domain records
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Expired records used more recently than this are refreshed by the sweep
    #[serde(default = "default_recent_use_window_secs")]
    pub recent_use_window_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            sweep_interval_secs: default_sweep_interval_secs(),
            recent_use_window_secs: default_recent_use_window_secs(),
        }
    }
}

fn default_path() -> String {
    "sidestep-hosts.json".to_string()
}

fn default_sweep_interval_secs() -> u64 {
    3600
}

fn default_recent_use_window_secs() -> u64 {
    7 * 24 * 3600
}
