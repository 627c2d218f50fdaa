/// Errors returned by [`crate::GitProvider`] implementations.
///
/// Every variant is fatal to a conformance run.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The token is missing, invalid or lacks a required scope.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested organization or pull request does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status.
    #[error("GitHub API error: {status}: {message}")]
    Api { status: u16, message: String },

    /// The GraphQL endpoint answered with an `errors` array.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// A connection hit its page size, so the snapshot would be truncated.
    #[error("Too many {0} nodes")]
    TooManyNodes(&'static str),

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
