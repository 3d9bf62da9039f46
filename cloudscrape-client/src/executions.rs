//! Execution-related API operations

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

use crate::error::Result;
use crate::{Transport, decode};
use cloudscrape_core::{Execution, ResultFile, ResultSet};

/// Resource client for executions
///
/// Obtained from [`CloudScrapeClient::executions`](crate::CloudScrapeClient::executions);
/// stateless beyond the shared transport. Execution ids are opaque strings
/// issued by the service.
#[derive(Debug, Clone)]
pub struct Executions {
    transport: Arc<Transport>,
}

impl Executions {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get an execution
    ///
    /// # Arguments
    /// * `execution_id` - The execution to fetch
    ///
    /// # Returns
    /// The execution with its current lifecycle state
    pub async fn get(&self, execution_id: &str) -> Result<Execution> {
        let body = self
            .transport
            .request_json(&format!("executions/{execution_id}"), Method::GET, None)
            .await?;

        decode(&body)
    }

    /// Delete an execution permanently
    ///
    /// Reports delivery, not success: `Ok(true)` means only that the request
    /// did not fail in transport. See
    /// [`CloudScrapeClient::request_boolean`](crate::CloudScrapeClient::request_boolean).
    pub async fn remove(&self, execution_id: &str) -> Result<bool> {
        self.transport
            .request_boolean(&format!("executions/{execution_id}"), Method::DELETE, None)
            .await
    }

    /// Get the entire result of an execution
    pub async fn get_result(&self, execution_id: &str) -> Result<ResultSet> {
        let body = self
            .transport
            .request_json(
                &format!("executions/{execution_id}/result"),
                Method::GET,
                None,
            )
            .await?;

        decode(&body)
    }

    /// Get a file from a result set
    ///
    /// The file is wrapped from the raw response: its MIME type comes from
    /// the Content-Type header, its contents from the body.
    ///
    /// # Arguments
    /// * `execution_id` - The execution that produced the file
    /// * `file_id` - The file to fetch
    pub async fn get_result_file(&self, execution_id: &str, file_id: &str) -> Result<ResultFile> {
        let response = self
            .transport
            .request(
                &format!("executions/{execution_id}/file/{file_id}"),
                Method::GET,
                None,
            )
            .await?;

        let mime_type = response
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(ResultFile::new(mime_type, response.content))
    }

    /// Stop a running execution
    pub async fn stop(&self, execution_id: &str) -> Result<bool> {
        self.transport
            .request_boolean(&format!("executions/{execution_id}/stop"), Method::POST, None)
            .await
    }

    /// Resume a stopped execution
    pub async fn resume(&self, execution_id: &str) -> Result<bool> {
        self.transport
            .request_boolean(
                &format!("executions/{execution_id}/continue"),
                Method::POST,
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ClientError;
    use crate::{ClientConfig, CloudScrapeClient, ExecutionState};
    use wiremock::matchers::{method, path};
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

    #[tokio::test]
    async fn get_decodes_execution() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/executions/e1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"_id":"e1","_state":"RUNNING","_starts":1000,"_finished":0}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let execution = test_client(&server).executions().get("e1").await.unwrap();

        assert_eq!(execution.id, "e1");
        assert_eq!(execution.state, ExecutionState::Running);
        assert_eq!(execution.finished, 0);
    }

    #[tokio::test]
    async fn get_surfaces_decode_error_on_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/executions/e1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .executions()
            .get("e1")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn remove_issues_delete_and_reports_delivery() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/executions/e1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server lost it"))
            .expect(1)
            .mount(&server)
            .await;

        // delivery, not success: a 500 still comes back as true
        let removed = test_client(&server).executions().remove("e1").await.unwrap();
        assert!(removed);
    }

    #[tokio::test]
    async fn get_result_decodes_result_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/executions/e1/result"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"headers":["a","b"],"rows":[["1","2"]],"totalRows":1}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let result = test_client(&server)
            .executions()
            .get_result("e1")
            .await
            .unwrap();

        assert_eq!(result.headers, vec!["a", "b"]);
        assert_eq!(result.rows, vec![vec!["1", "2"]]);
        assert_eq!(result.total_rows, 1);
    }

    #[tokio::test]
    async fn get_result_file_wraps_content_type_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/executions/e1/file/f9"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("a,b\n1,2\n", "text/csv"))
            .mount(&server)
            .await;

        let file = test_client(&server)
            .executions()
            .get_result_file("e1", "f9")
            .await
            .unwrap();

        assert_eq!(file.mime_type.as_deref(), Some("text/csv"));
        assert_eq!(file.contents, "a,b\n1,2\n");
    }

    #[tokio::test]
    async fn stop_and_resume_post_to_lifecycle_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/executions/e1/stop"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/executions/e1/continue"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(client.executions().stop("e1").await.unwrap());
        assert!(client.executions().resume("e1").await.unwrap());
    }
}
