//! CloudScrape HTTP Client
//!
//! A typed client for the CloudScrape job-execution API: runs (reusable
//! scraping jobs) are authored in the CloudScrape application, and this crate
//! triggers executions of them and fetches the tabular results or generated
//! files.
//!
//! Every operation performs exactly one authenticated round trip. There is no
//! caching, no retrying, and no pagination beyond the single offset/limit
//! call on [`Runs::get_executions`].
//!
//! # Example
//!
//! ```no_run
//! use cloudscrape_client::CloudScrape;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut api = CloudScrape::new();
//!     api.init("api-key", "account-id");
//!
//!     let result = api.executions()?.get_result("execution-id").await?;
//!     println!("{} rows", result.total_rows);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
mod executions;
mod runs;

// Re-export commonly used types
pub use auth::{ACCESS_HEADER, ACCOUNT_HEADER, Credentials};
pub use cloudscrape_core::{Execution, ExecutionList, ExecutionState, ResultFile, ResultSet, Run};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use executions::Executions;
pub use runs::Runs;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Raw response from the CloudScrape API
///
/// Status, headers and body are populated for every delivered response,
/// non-2xx included; the transport performs no status-code branching.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response body, read fully as UTF-8 text
    pub content: String,

    /// Response headers (case-insensitive keys, duplicate values allowed)
    pub headers: HeaderMap,

    /// HTTP status code
    pub status: StatusCode,

    /// Canonical reason phrase for the status, empty when none exists
    pub status_description: String,
}

/// Authenticated transport shared by the resource clients
///
/// Read-only after construction, so one transport can serve any number of
/// concurrent calls.
#[derive(Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    credentials: Credentials,
    endpoint: String,
    user_agent: String,
    request_timeout: Duration,
}

impl Transport {
    /// Send one authenticated request and read the response in full.
    ///
    /// The body, when present, is attached verbatim. Transport failures
    /// propagate unmodified; the connection is released on every exit path
    /// once the response (or error) is dropped.
    pub(crate) async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<RawResponse> {
        let url = format!("{}/{}", self.endpoint, path);
        debug!(%method, path, "sending request");

        let mut request = self
            .http
            .request(method, &url)
            .header(ACCESS_HEADER, self.credentials.access_digest())
            .header(ACCOUNT_HEADER, self.credentials.account_id())
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.request_timeout);

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.text().await?;

        debug!(status = status.as_u16(), bytes = content.len(), "response received");

        Ok(RawResponse {
            content,
            headers,
            status,
            status_description: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }

    /// Send a request and return only the response body text
    pub(crate) async fn request_json(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<String> {
        Ok(self.request(path, method, body).await?.content)
    }

    /// Send a request and report whether it was delivered
    ///
    /// `Ok(true)` means only that the transport did not error; failure
    /// statuses still come back as `true`.
    pub(crate) async fn request_boolean(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<bool> {
        self.request(path, method, body).await?;
        Ok(true)
    }
}

/// Decode a JSON response body into a typed model
///
/// Structural, field-name based; unknown fields are ignored. A body that does
/// not match the expected shape surfaces as [`ClientError::Decode`], never a
/// defaulted value.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// HTTP client for the CloudScrape API
///
/// Owns the authenticated transport and hands out the two resource clients.
/// Configuration and credentials are fixed at construction; clones share the
/// same transport and the client is safe to call from many tasks at once.
#[derive(Debug, Clone)]
pub struct CloudScrapeClient {
    transport: Arc<Transport>,
    executions: Executions,
    runs: Runs,
}

impl CloudScrapeClient {
    /// Create a client with the default configuration
    pub fn new(api_key: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self::with_config(api_key, account_id, ClientConfig::default())
    }

    /// Create a client with explicit transport configuration
    ///
    /// # Example
    /// ```
    /// use cloudscrape_client::{ClientConfig, CloudScrapeClient};
    /// use std::time::Duration;
    ///
    /// let client = CloudScrapeClient::with_config(
    ///     "api-key",
    ///     "account-id",
    ///     ClientConfig {
    ///         request_timeout: Duration::from_secs(120),
    ///         ..ClientConfig::default()
    ///     },
    /// );
    /// ```
    pub fn with_config(
        api_key: impl Into<String>,
        account_id: impl Into<String>,
        config: ClientConfig,
    ) -> Self {
        let transport = Arc::new(Transport {
            http: reqwest::Client::new(),
            credentials: Credentials::new(api_key, account_id),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
            request_timeout: config.request_timeout,
        });

        Self {
            executions: Executions::new(Arc::clone(&transport)),
            runs: Runs::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Base URL requests are resolved against, without its trailing slash
    pub fn endpoint(&self) -> &str {
        &self.transport.endpoint
    }

    /// Interact with executions
    pub fn executions(&self) -> &Executions {
        &self.executions
    }

    /// Interact with runs
    pub fn runs(&self) -> &Runs {
        &self.runs
    }

    /// Make one authenticated call to the CloudScrape API
    ///
    /// `path` is resolved against the configured endpoint with no local
    /// validation; the caller is responsible for correct segment encoding.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<RawResponse> {
        self.transport.request(path, method, body).await
    }

    /// Make a call and return only the response body text
    pub async fn request_json(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<String> {
        self.transport.request_json(path, method, body).await
    }

    /// Make a call and report whether it was delivered
    ///
    /// Returns `Ok(true)` whenever the transport did not error, including for
    /// responses whose status indicates failure, so a `true` is not a strong
    /// success guarantee. Use [`request`](Self::request) and inspect the
    /// status when one is needed.
    pub async fn request_boolean(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<bool> {
        self.transport.request_boolean(path, method, body).await
    }
}

/// Entry point mirroring the service's published client surface
///
/// Must be initialized with credentials before either resource client can be
/// obtained; until then every accessor fails with
/// [`ClientError::Uninitialized`] and no network call is made. After
/// initialization the accessors return the same instances on every call.
///
/// The facade is a plain value: hold it wherever the application composes its
/// dependencies. Code that does not need the two-step lifecycle can construct
/// a [`CloudScrapeClient`] directly.
#[derive(Debug, Default)]
pub struct CloudScrape {
    client: Option<CloudScrapeClient>,
}

impl CloudScrape {
    /// Create an uninitialized facade
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize with account credentials
    ///
    /// Builds the underlying client. Calling it again discards the previous
    /// client and its credentials.
    pub fn init(&mut self, api_key: impl Into<String>, account_id: impl Into<String>) {
        self.client = Some(CloudScrapeClient::new(api_key, account_id));
    }

    /// The underlying client
    pub fn default_client(&self) -> Result<&CloudScrapeClient> {
        self.client.as_ref().ok_or(ClientError::Uninitialized)
    }

    /// Interact with executions
    pub fn executions(&self) -> Result<&Executions> {
        Ok(self.default_client()?.executions())
    }

    /// Interact with runs
    pub fn runs(&self) -> Result<&Runs> {
        Ok(self.default_client()?.runs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> CloudScrapeClient {
        CloudScrapeClient::with_config(
            "secret",
            "acct-1",
            ClientConfig {
                endpoint: server.uri(),
                ..ClientConfig::default()
            },
        )
    }

    #[test]
    fn facade_fails_before_init() {
        let api = CloudScrape::new();

        assert!(api.executions().unwrap_err().is_uninitialized());
        assert!(api.runs().unwrap_err().is_uninitialized());
        assert!(api.default_client().unwrap_err().is_uninitialized());
    }

    #[test]
    fn facade_hands_out_stable_instances_after_init() {
        let mut api = CloudScrape::new();
        api.init("key", "account");

        assert!(std::ptr::eq(
            api.executions().unwrap(),
            api.executions().unwrap()
        ));
        assert!(std::ptr::eq(api.runs().unwrap(), api.runs().unwrap()));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = CloudScrapeClient::with_config(
            "key",
            "account",
            ClientConfig {
                endpoint: "https://app.cloudscrape.com/api/".to_string(),
                ..ClientConfig::default()
            },
        );

        assert_eq!(client.endpoint(), "https://app.cloudscrape.com/api");
    }

    #[tokio::test]
    async fn request_exposes_non_2xx_like_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/executions/missing"))
            .respond_with(
                ResponseTemplate::new(418)
                    .insert_header("x-made-of", "tea")
                    .set_body_string("short and stout"),
            )
            .mount(&server)
            .await;

        let response = test_client(&server)
            .request("executions/missing", Method::GET, None)
            .await
            .unwrap();

        assert_eq!(response.status.as_u16(), 418);
        assert_eq!(response.status_description, "I'm a teapot");
        assert_eq!(response.content, "short and stout");
        // header lookup is case-insensitive
        assert_eq!(
            response.headers.get("X-Made-Of").unwrap().to_str().unwrap(),
            "tea"
        );
    }

    #[tokio::test]
    async fn request_sends_fixed_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/runs/r1"))
            // md5("acct-1" + "secret")
            .and(header(ACCESS_HEADER, "7ebc16311df8a326586b69e80c578361"))
            .and(header(ACCOUNT_HEADER, "acct-1"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .and(header("user-agent", config::DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let body = test_client(&server)
            .request_json("runs/r1", Method::GET, None)
            .await
            .unwrap();

        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn request_honors_configured_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/executions/slow"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = CloudScrapeClient::with_config(
            "secret",
            "acct-1",
            ClientConfig {
                endpoint: server.uri(),
                request_timeout: Duration::from_millis(50),
                ..ClientConfig::default()
            },
        );

        let err = client
            .request("executions/slow", Method::GET, None)
            .await
            .unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn request_boolean_is_true_for_failure_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/executions/e1/stop"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let delivered = test_client(&server)
            .request_boolean("executions/e1/stop", Method::POST, None)
            .await
            .unwrap();

        assert!(delivered);
    }
}
