//! Configuration
//!
//! Storage keys, timings and the backend location. Defaults match what the
//! deployed front end has always used so existing browser data keeps working.

use std::time::Duration;

/// Port the backend listens on during local development
pub const DEV_BACKEND_PORT: u16 = 3001;

/// Where backend requests go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    /// Prefix for every API path; empty means same origin
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Development builds talk to the backend on the page's own host;
    /// release builds use the configured URL (same origin when unset).
    pub fn resolve(dev: bool, protocol: &str, hostname: &str, configured: Option<&str>) -> Self {
        if dev {
            return Self::new(format!("{}//{}:{}", protocol, hostname, DEV_BACKEND_PORT));
        }
        Self::new(configured.unwrap_or_default())
    }

    /// Absolute URL for an API path such as `/api/finance/data`
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Contact persistence settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactStoreConfig {
    pub storage_key: String,
    /// Quiet period before a change is written
    pub debounce: Duration,
}

impl Default for ContactStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: "contacts_v1".to_string(),
            debounce: Duration::from_millis(300),
        }
    }
}

/// Session storage settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub token_key: String,
    pub login_flag_key: String,
    /// Minimum spacing between auth-changed broadcasts caused by 401s
    pub logout_throttle: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "sc_active_session".to_string(),
            login_flag_key: "isLoggedIn".to_string(),
            logout_throttle: Duration::from_secs(1),
        }
    }
}
