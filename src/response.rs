//! Response wrapper that keeps the typed payload next to the raw exchange.
//!
//! The [`Response`] type wraps the decoded endpoint payload together with the
//! HTTP status, headers, envelope metadata and raw body, so rate limits and
//! request ids stay available after decoding.

use crate::envelope::{Envelope, Meta, Notification};
use crate::rate_limit::RateLimit;
use crate::transport::RawResponse;
use http::{HeaderMap, StatusCode};
use std::time::Duration;
use url::Url;

/// A successful Foursquare response.
///
/// # Type Parameters
///
/// * `T` - The typed result decoded from the envelope payload
///
/// # Examples
///
/// ```no_run
/// use foursquare::Client;
///
/// # async fn example() -> Result<(), foursquare::Error> {
/// let client = Client::builder()
///     .client_credentials("client-id", "client-secret")
///     .build()?;
///
/// let response = client.venues().details("40a55d80f964a52020f31ee3").await?;
///
/// println!("Venue: {}", response.data.name);
/// println!("Request took {:?}", response.latency);
/// println!("Requests left this hour: {}", response.rate_limit().remaining);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded endpoint payload.
    pub data: T,

    /// Envelope metadata, including the request id.
    pub meta: Meta,

    /// Notifications attached to the envelope.
    pub notifications: Vec<Notification>,

    /// The raw response body.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The request URL with credentials redacted.
    pub url: Url,

    /// Time from dispatch until the body was fully read.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Assembles a response from a classified exchange and its decoded payload.
    pub(crate) fn new(data: T, raw: RawResponse, envelope: Envelope) -> Self {
        Self {
            data,
            meta: envelope.meta,
            notifications: envelope.notifications,
            raw_body: raw.body_text(),
            status: raw.status,
            headers: raw.headers,
            url: raw.url,
            latency: raw.latency,
        }
    }

    /// Maps the response data to a different type, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            meta: self.meta,
            notifications: self.notifications,
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            url: self.url,
            latency: self.latency,
        }
    }

    /// Reads the rate limit counters from the response headers.
    pub fn rate_limit(&self) -> RateLimit {
        RateLimit::from_headers(&self.headers)
    }

    /// Returns the request id Foursquare assigned, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id.as_deref()
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Consumes the response and returns only the data.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn response() -> Response<u32> {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("500"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("499"));
        headers.insert("x-ratelimit-path", HeaderValue::from_static("/v2/venues/search"));

        let raw = RawResponse {
            status: StatusCode::OK,
            headers,
            body: b"{}".to_vec(),
            url: Url::parse("https://api.foursquare.com/v2/venues/search").unwrap(),
            latency: Duration::from_millis(12),
        };
        let envelope = Envelope {
            meta: Meta {
                code: 200,
                request_id: Some("req-9".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        Response::new(42, raw, envelope)
    }

    #[test]
    fn test_rate_limit_and_request_id() {
        let response = response();
        let rate = response.rate_limit();
        assert_eq!(rate.limit, 500);
        assert_eq!(rate.remaining, 499);
        assert_eq!(rate.path, "/v2/venues/search");
        assert_eq!(response.request_id(), Some("req-9"));
        assert_eq!(response.header("x-ratelimit-limit"), Some("500"));
    }

    #[test]
    fn test_map_keeps_metadata() {
        let mapped = response().map(|n| n.to_string());
        assert_eq!(mapped.data, "42");
        assert_eq!(mapped.latency, Duration::from_millis(12));
        assert_eq!(*mapped, "42");
    }
}
