//! Error types for the filter builder and the API client.

/// Errors that can occur when building filters or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An equality denoter outside the six OData comparison tokens.
    #[error("equality denoter must be one of: {allowed:?}, got '{got}'")]
    InvalidEqualityDenoter {
        got: String,
        allowed: &'static [&'static str],
    },
    /// A filter type tag other than `date` or `search`.
    #[error("filter type must be one of: {allowed:?}, got '{got}'")]
    InvalidFilterType {
        got: String,
        allowed: &'static [&'static str],
    },
    /// A textual filter clause that could not be parsed.
    #[error("invalid filter spec '{spec}': {reason}")]
    InvalidFilterSpec { spec: String, reason: String },
    /// The request URL could not be parsed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    /// An HTTP request failed (network error or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the expected JSON.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// The response JSON had no `value` array.
    #[error("Response has no 'value' array")]
    MissingValue,
}

impl Error {
    /// Returns true for errors raised while building a filter, before any
    /// network traffic.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidEqualityDenoter { .. }
                | Error::InvalidFilterType { .. }
                | Error::InvalidFilterSpec { .. }
        )
    }
}
