//! File domain types

/// A file artifact produced by an execution
///
/// Built straight from an HTTP response (Content-Type header + body), never
/// from JSON. It carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    /// MIME type reported by the service, if the response carried one
    pub mime_type: Option<String>,

    /// Raw file contents
    pub contents: String,
}

impl ResultFile {
    pub fn new(mime_type: Option<String>, contents: impl Into<String>) -> Self {
        Self {
            mime_type,
            contents: contents.into(),
        }
    }
}
