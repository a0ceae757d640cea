use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the client.
///
/// Argument and capability checks (`InvalidArgument`, `UnsupportedOperation`)
/// fire before any network I/O. The remaining variants surface exactly one
/// failed call each; there is no local recovery beyond the bounded retry in
/// [`crate::http`].
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-range caller input, detected before sending.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-2xx from the OAuth token endpoint. Carries the raw response body.
    #[error("authentication failed: {body}")]
    Authentication { body: String },

    /// Non-2xx from a resource endpoint after the retry budget is exhausted.
    #[error("api error {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Response body did not match the expected JSON shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// User-scoped endpoint called with a server token.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Connection, TLS or timeout failure from the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
