//! Execution domain types

use serde::{Deserialize, Serialize};

/// One attempt at a run, with lifecycle state.
///
/// Executions are created server-side when a run is executed. State
/// transitions are owned by the service; the client only observes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    /// The ID of the execution
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Current lifecycle state
    #[serde(rename = "_state")]
    pub state: ExecutionState,

    /// Time the execution was started, in milliseconds since the Unix epoch
    #[serde(rename = "_starts", default)]
    pub starts: i64,

    /// Time the execution finished, in milliseconds since the Unix epoch.
    /// Zero while the execution has not finished.
    #[serde(rename = "_finished", default)]
    pub finished: i64,
}

impl Execution {
    /// Finish timestamp, or `None` while the execution has not finished.
    pub fn finished_at(&self) -> Option<i64> {
        (self.finished != 0).then_some(self.finished)
    }
}

/// Execution lifecycle state
///
/// Closed set, no sub-states. `Stopped` executions can be resumed; `Failed`
/// and `Ok` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionState {
    Queued,
    Pending,
    Running,
    Failed,
    Stopped,
    Ok,
}

/// One page of executions for a run
///
/// A pagination view, not an owned collection: `total_rows` counts every
/// execution of the run, `rows` holds only the requested page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionList {
    /// Offset of the first entry in this page
    #[serde(default)]
    pub offset: i64,

    /// Total number of executions available across all pages
    #[serde(rename = "totalRows", default)]
    pub total_rows: i64,

    /// The page of executions returned
    #[serde(default)]
    pub rows: Vec<Execution>,
}
