/// Errors from the client data-access layer.
///
/// Every failure is passed through to the caller unchanged; nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A response could not be converted to the in-memory form.
    #[error("Malformed response: {0}")]
    Decode(#[from] survey_core::error::CoreError),
}

impl ClientError {
    /// `true` when the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
