use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.feedbin.com/v2";

/// Connection settings for the Feedbin API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbinConfig {
    /// API root, without a trailing slash (default: Feedbin v2)
    pub base_url: String,

    /// Account email; `FEEDBIN_USER` takes precedence
    pub username: Option<String>,

    /// Account password; `FEEDBIN_PASS` takes precedence
    pub password: Option<String>,

    /// Per-request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for FeedbinConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            password: None,
            timeout_secs: 30,
        }
    }
}

impl FeedbinConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
