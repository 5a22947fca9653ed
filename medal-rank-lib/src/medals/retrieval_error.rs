/// Why medal data could not be obtained from a source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RetrievalError {
    /// The request could not be sent or the response body could not be read.
    #[error("request to '{locator}' failed: {reason}")]
    Transport { locator: String, reason: String },

    /// The source answered with a non-success status.
    #[error("'{locator}' responded with HTTP status {status}")]
    Status { locator: String, status: u16 },

    /// The body is not a JSON array of medal counts.
    #[error("'{locator}' did not return a list of medal counts: {reason}")]
    Payload { locator: String, reason: String },

    /// The fetch was abandoned before it produced a result.
    #[error("retrieval of '{locator}' was aborted: {reason}")]
    Aborted { locator: String, reason: String },
}
