//! Error type returned by every client operation.

/// All errors the API client can return.
///
/// The three variants map to the three ways a request can fail: the transport
/// never completes, the backend answers with a non-success status, or a
/// success response carries a body that is not the expected JSON. Callers can
/// branch on the variant (and on [`Status`](ApiError::Status)'s numeric code)
/// without inspecting message strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport or connection failure — the request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {code}")]
    Status { code: u16 },

    /// A success response whose body failed to decode as the expected JSON.
    #[error("could not decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a transport-layer error from a request that did not yield a
    /// success response.
    pub(crate) fn from_transport(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => ApiError::Status { code },
            other => ApiError::Network(other.to_string()),
        }
    }

    /// Classify a failure while reading the body of a success response.
    ///
    /// The transport can still fail mid-body (connection reset while
    /// streaming); that stays [`Network`](ApiError::Network). Only an actual
    /// JSON problem is a [`Decode`](ApiError::Decode) error.
    pub(crate) fn from_decode(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Io(e) => ApiError::Network(e.to_string()),
            other => ApiError::Decode(other.to_string()),
        }
    }
}
