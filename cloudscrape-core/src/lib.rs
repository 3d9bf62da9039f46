//! CloudScrape Core
//!
//! Domain types for the CloudScrape job-execution service.
//!
//! This crate contains the typed representations of the service's resources
//! (runs, executions, results, files) as they appear on the wire. All types
//! are plain values: created fresh per response, owned by the caller, no I/O.

pub mod domain;

pub use domain::execution::{Execution, ExecutionList, ExecutionState};
pub use domain::file::ResultFile;
pub use domain::result::ResultSet;
pub use domain::run::Run;
