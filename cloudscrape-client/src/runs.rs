//! Run-related API operations

use std::sync::Arc;

use reqwest::Method;

use crate::error::Result;
use crate::{Transport, decode};
use cloudscrape_core::{Execution, ExecutionList, ResultSet, Run};

/// Resource client for runs
///
/// Obtained from [`CloudScrapeClient::runs`](crate::CloudScrapeClient::runs);
/// stateless beyond the shared transport. Run ids are opaque strings issued
/// by the service.
#[derive(Debug, Clone)]
pub struct Runs {
    transport: Arc<Transport>,
}

impl Runs {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get a run
    pub async fn get(&self, run_id: &str) -> Result<Run> {
        let body = self
            .transport
            .request_json(&format!("runs/{run_id}"), Method::GET, None)
            .await?;

        decode(&body)
    }

    /// Delete a run permanently
    ///
    /// Reports delivery, not success: `Ok(true)` means only that the request
    /// did not fail in transport. See
    /// [`CloudScrapeClient::request_boolean`](crate::CloudScrapeClient::request_boolean).
    pub async fn remove(&self, run_id: &str) -> Result<bool> {
        self.transport
            .request_boolean(&format!("runs/{run_id}"), Method::DELETE, None)
            .await
    }

    /// Start a new execution of the run
    ///
    /// The execution starts asynchronously: the returned value is typically
    /// still queued or pending. Poll
    /// [`Executions::get`](crate::Executions::get) to observe completion.
    pub async fn execute(&self, run_id: &str) -> Result<Execution> {
        let body = self
            .transport
            .request_json(&format!("runs/{run_id}/execute"), Method::POST, None)
            .await?;

        decode(&body)
    }

    /// Start a new execution of the run and wait for it to finish
    ///
    /// The service holds the request open until the run completes and answers
    /// with the full result, so this call blocks for as long as the run takes,
    /// bounded by the configured request timeout. For a tighter deadline wrap
    /// the future in `tokio::time::timeout`; dropping it cancels the wait
    /// client-side.
    ///
    /// The execution and result are deleted server-side on completion, both
    /// successful and failed, so do not look the execution up afterwards.
    pub async fn execute_sync(&self, run_id: &str) -> Result<ResultSet> {
        let body = self
            .transport
            .request_json(&format!("runs/{run_id}/execute/wait"), Method::POST, None)
            .await?;

        decode(&body)
    }

    /// Start a new execution of the run with the given inputs
    ///
    /// # Arguments
    /// * `run_id` - The run to execute
    /// * `inputs` - Run parameters as a JSON document, passed through
    ///   verbatim; malformed JSON is only rejected by the service
    pub async fn execute_with_input(&self, run_id: &str, inputs: &str) -> Result<Execution> {
        let body = self
            .transport
            .request_json(
                &format!("runs/{run_id}/execute/inputs"),
                Method::POST,
                Some(inputs.to_string()),
            )
            .await?;

        decode(&body)
    }

    /// Start a new execution with inputs and wait for it to finish
    ///
    /// Same long-blocking semantics as [`execute_sync`](Self::execute_sync);
    /// the inputs, execution and result are all deleted server-side on
    /// completion.
    pub async fn execute_with_input_sync(&self, run_id: &str, inputs: &str) -> Result<ResultSet> {
        let body = self
            .transport
            .request_json(
                &format!("runs/{run_id}/execute/inputs/wait"),
                Method::POST,
                Some(inputs.to_string()),
            )
            .await?;

        decode(&body)
    }

    /// Get the result from the latest execution of the run
    pub async fn get_latest_result(&self, run_id: &str) -> Result<ResultSet> {
        let body = self
            .transport
            .request_json(&format!("runs/{run_id}/latest/result"), Method::GET, None)
            .await?;

        decode(&body)
    }

    /// Get one page of executions for the run
    ///
    /// `offset` and `limit` are forwarded verbatim, with no local bounds
    /// checking; the service is the source of truth for valid ranges. Its own
    /// default page size is 30.
    pub async fn get_executions(
        &self,
        run_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<ExecutionList> {
        let body = self
            .transport
            .request_json(
                &format!("runs/{run_id}/executions?offset={offset}&limit={limit}"),
                Method::GET,
                None,
            )
            .await?;

        decode(&body)
    }
}
