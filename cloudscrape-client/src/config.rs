//! Client configuration
//!
//! All transport parameters are fixed at client construction. Defaults match
//! the hosted CloudScrape service.

use std::time::Duration;

/// Base endpoint of the hosted CloudScrape API
pub const DEFAULT_ENDPOINT: &str = "https://app.cloudscrape.com/api/";

/// User agent reported by this client
pub const DEFAULT_USER_AGENT: &str = concat!("cloudscrape-rs/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout
///
/// Deliberately large: the synchronous execute-and-wait operations block on a
/// single request until the run finishes, bounded only by this timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Transport configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are resolved against
    pub endpoint: String,

    /// User-Agent header value
    pub user_agent: String,

    /// Timeout applied to every request. Raise it if synchronous executions
    /// of long-running runs keep timing out.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
