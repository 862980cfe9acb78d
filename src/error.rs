//! Error types for Foursquare API calls.
//!
//! Every failure a caller can observe is one variant of [`Error`]. The variants
//! fall into four groups that callers are expected to branch on:
//!
//! - [`Error::Transport`]: the request never produced an HTTP response.
//! - [`Error::Decode`]: a response arrived but its body was not the expected JSON.
//! - [`Error::Api`]: Foursquare answered and reported a failure in its envelope.
//! - [`Error::Validation`] / [`Error::Precondition`]: the call was rejected
//!   before anything was sent.

use crate::rate_limit::RateLimit;
use http::{HeaderMap, StatusCode};
use std::fmt;
use url::Url;

/// The main error type for Foursquare API calls.
///
/// # Examples
///
/// ```no_run
/// use foursquare::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .client_credentials("client-id", "client-secret")
///     .build()?;
///
/// match client.venues().details("40a55d80f964a52020f31ee3").await {
///     Ok(response) => println!("Venue: {}", response.data.name),
///     Err(Error::Api { code, error_type, error_detail, .. }) => {
///         eprintln!("Foursquare said {} ({}): {}", code, error_type, error_detail);
///     }
///     Err(Error::Transport(e)) => eprintln!("Could not reach Foursquare: {}", e),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be completed (DNS, refused connection, timeout, TLS, I/O).
    ///
    /// When this is returned the response body, if any, was never inspected.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded.
    ///
    /// Raised both when the envelope itself is malformed and when the endpoint
    /// payload does not match the expected shape.
    ///
    /// # Fields
    ///
    /// * `raw_response` - The raw response body as a string
    /// * `serde_error` - The error message from serde
    /// * `status` - The HTTP status code of the response
    #[error("Failed to decode response (status {status}): {serde_error}")]
    Decode {
        /// The raw response body that failed to decode
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// Foursquare reported a failure in the response envelope.
    ///
    /// This is produced when the HTTP status is not 200, when `meta.code` is not
    /// 200, or when `meta.errorDetail` is non-empty. Some upstream failures come
    /// back as HTTP 200 with the error only visible in `meta`.
    #[error("API error {code} ({error_type}): {error_detail}")]
    Api {
        /// The HTTP status code
        status: StatusCode,
        /// `meta.code` from the envelope
        code: u16,
        /// `meta.errorType` from the envelope
        error_type: ApiErrorType,
        /// `meta.errorDetail` from the envelope
        error_detail: String,
        /// `meta.requestId` from the envelope, if present
        request_id: Option<String>,
        /// The request URL with credentials redacted
        url: Url,
        /// The response headers
        headers: Box<HeaderMap>,
        /// Rate limit counters read from the response headers
        rate_limit: RateLimit,
    },

    /// The caller supplied insufficient input for the endpoint.
    ///
    /// No request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The endpoint requires an acting user but the client has no access token.
    ///
    /// No request was sent.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Invalid configuration was provided to the client builder.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Endpoint parameters could not be encoded into a query string.
    #[error("Failed to encode query parameters: {0}")]
    SerializationFailed(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if repeating the call could plausibly succeed.
    ///
    /// The client never retries on its own; this is a hint for callers that
    /// implement their own policy. Transport errors, 5xx and 429 responses, and
    /// the `rate_limit_exceeded` / `server_error` error types count as retryable.
    ///
    /// # Examples
    ///
    /// ```
    /// use foursquare::Error;
    ///
    /// let err = Error::Validation("ll or near is required".to_string());
    /// assert!(!err.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Api {
                status, error_type, ..
            } => {
                status.is_server_error()
                    || *status == StatusCode::TOO_MANY_REQUESTS
                    || matches!(
                        error_type,
                        ApiErrorType::RateLimitExceeded | ApiErrorType::ServerError
                    )
            }
            Error::Decode { .. } => false,
            Error::Validation(_) => false,
            Error::Precondition(_) => false,
            Error::ConfigurationError(_) => false,
            Error::SerializationFailed(_) => false,
            Error::InvalidUrl(_) => false,
        }
    }

    /// Returns `true` if the transport layer gave up because of a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// Returns the HTTP status code if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Decode { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Decode { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the rate limit counters of the failed response.
    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match self {
            Error::Api { rate_limit, .. } => Some(rate_limit),
            _ => None,
        }
    }

    /// Returns the `meta.errorType` reported by Foursquare.
    pub fn api_error_type(&self) -> Option<&ApiErrorType> {
        match self {
            Error::Api { error_type, .. } => Some(error_type),
            _ => None,
        }
    }
}

/// The `meta.errorType` values documented by Foursquare.
///
/// Unrecognized values are kept verbatim in [`ApiErrorType::Unknown`] so that
/// new upstream error types never break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiErrorType {
    /// OAuth token was not provided or was invalid.
    InvalidAuth,
    /// A required parameter was missing or a parameter was malformed.
    ParamError,
    /// The requested path does not exist.
    EndpointError,
    /// The user is not authorized to take this action.
    NotAuthorized,
    /// The rate limit for this hour has been exceeded.
    RateLimitExceeded,
    /// The endpoint is deprecated.
    Deprecated,
    /// Server is currently experiencing issues.
    ServerError,
    /// A named location could not be geocoded.
    FailedGeocode,
    /// Some other type of error occurred.
    Other,
    /// `meta.errorType` was absent.
    #[default]
    None,
    /// An error type this crate does not know about.
    Unknown(String),
}

impl ApiErrorType {
    /// Returns the wire spelling of this error type.
    pub fn as_str(&self) -> &str {
        match self {
            ApiErrorType::InvalidAuth => "invalid_auth",
            ApiErrorType::ParamError => "param_error",
            ApiErrorType::EndpointError => "endpoint_error",
            ApiErrorType::NotAuthorized => "not_authorized",
            ApiErrorType::RateLimitExceeded => "rate_limit_exceeded",
            ApiErrorType::Deprecated => "deprecated",
            ApiErrorType::ServerError => "server_error",
            ApiErrorType::FailedGeocode => "failed_geocode",
            ApiErrorType::Other => "other",
            ApiErrorType::None => "",
            ApiErrorType::Unknown(s) => s,
        }
    }
}

impl From<&str> for ApiErrorType {
    fn from(s: &str) -> Self {
        match s {
            "invalid_auth" => ApiErrorType::InvalidAuth,
            "param_error" => ApiErrorType::ParamError,
            "endpoint_error" => ApiErrorType::EndpointError,
            "not_authorized" => ApiErrorType::NotAuthorized,
            "rate_limit_exceeded" => ApiErrorType::RateLimitExceeded,
            "deprecated" => ApiErrorType::Deprecated,
            "server_error" => ApiErrorType::ServerError,
            "failed_geocode" => ApiErrorType::FailedGeocode,
            "other" => ApiErrorType::Other,
            "" => ApiErrorType::None,
            other => ApiErrorType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorType::None => f.write_str("unspecified"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A specialized `Result` type for Foursquare API calls.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
