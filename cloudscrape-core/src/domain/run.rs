//! Run domain types

use serde::{Deserialize, Serialize};

/// A reusable job definition on the remote service
///
/// Runs are authored in the CloudScrape application; this client never
/// mutates them beyond deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// The ID of the run
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Human-readable name of the run
    #[serde(default)]
    pub name: String,
}
