//! Failure kinds for REST calls.

/// Why an API call did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS, no backend).
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16 },
    /// The body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR), where no fetch is available.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the server explicitly rejected credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403 })
    }
}
