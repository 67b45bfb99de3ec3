// ABOUTME: Client configuration - service endpoints and request timeout.
// ABOUTME: Defaults point at the public BV-BRC deployment.

use std::time::Duration;

pub const DEFAULT_APP_SERVICE_URL: &str = "https://p3.theseed.org/services/app_service";
pub const DEFAULT_WORKSPACE_URL: &str = "https://p3.theseed.org/services/Workspace";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoints and limits used by [`BvbrcClient`](crate::client::BvbrcClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub app_service_url: String,
    pub workspace_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_service_url: DEFAULT_APP_SERVICE_URL.to_string(),
            workspace_url: DEFAULT_WORKSPACE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app_service_url(mut self, url: impl Into<String>) -> Self {
        self.app_service_url = url.into();
        self
    }

    pub fn with_workspace_url(mut self, url: impl Into<String>) -> Self {
        self.workspace_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
