//! Portal configuration from environment variables, with logged defaults.

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_STATE_DIR: &str = "state";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the REST backend.
    pub api_url: String,
    /// Directory holding the persisted session state file.
    pub state_dir: PathBuf,
    pub http_timeout: Duration,
}

impl PortalConfig {
    pub fn load() -> Self {
        let api_url = env_or("LEXPORTAL_API_URL", DEFAULT_API_URL);
        let state_dir = PathBuf::from(env_or("LEXPORTAL_STATE_DIR", DEFAULT_STATE_DIR));
        let timeout_secs = std::env::var("LEXPORTAL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        Self { api_url, state_dir, http_timeout: Duration::from_secs(timeout_secs) }
    }

    /// Path of the session state file under the state dir.
    pub fn session_file(&self) -> PathBuf {
        self.state_dir.join("session.json")
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            info!("{} not set, using default: {}", key, default);
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_file_lives_under_state_dir() {
        let cfg = PortalConfig::default();
        assert!(cfg.session_file().starts_with(&cfg.state_dir));
        assert_eq!(cfg.session_file().file_name().unwrap(), "session.json");
    }
}
