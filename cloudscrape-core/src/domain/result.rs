//! Result domain types

use serde::{Deserialize, Serialize};

/// Tabular output of an execution
///
/// Each row holds one string cell per entry in `headers`, in the same order.
/// `total_rows` counts every row the service holds for the execution and may
/// exceed `rows.len()` when the returned set is truncated; the client does
/// not enforce that relation, callers must check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    /// Column headers, in output order
    #[serde(default)]
    pub headers: Vec<String>,

    /// Rows of cell values
    #[serde(default)]
    pub rows: Vec<Vec<String>>,

    /// Total number of rows available
    #[serde(rename = "totalRows", default)]
    pub total_rows: i64,
}
