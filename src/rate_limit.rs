//! Rate limit counters parsed from Foursquare response headers.
//!
//! Foursquare reports the hourly quota for the endpoint that was called in
//! three headers. This module only reads them; the client never waits or
//! throttles on their behalf.

use http::HeaderMap;

/// Header carrying the request quota for the current window.
pub const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";

/// Header carrying the number of requests left in the current window.
pub const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";

/// Header carrying the path the quota applies to.
pub const HEADER_RATE_PATH: &str = "X-RateLimit-Path";

/// Rate limit counters for a single response.
///
/// Missing or non-numeric header values become `0` (or an empty path).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: u64,

    /// Requests left in the current window.
    pub remaining: u64,

    /// The API path the counters apply to.
    pub path: String,
}

impl RateLimit {
    /// Extracts rate limit counters from HTTP response headers.
    ///
    /// # Examples
    ///
    /// ```
    /// use foursquare::rate_limit::RateLimit;
    /// use http::HeaderMap;
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert("x-ratelimit-limit", "5000".parse().unwrap());
    /// headers.insert("x-ratelimit-remaining", "4999".parse().unwrap());
    ///
    /// let rate = RateLimit::from_headers(&headers);
    /// assert_eq!(rate.limit, 5000);
    /// assert_eq!(rate.remaining, 4999);
    /// assert_eq!(rate.path, "");
    /// ```
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: parse_counter(headers, HEADER_RATE_LIMIT),
            remaining: parse_counter(headers, HEADER_RATE_REMAINING),
            path: header_str(headers, HEADER_RATE_PATH)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Returns `true` if the quota is known and used up.
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}

fn parse_counter(headers: &HeaderMap, name: &str) -> u64 {
    header_str(headers, name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_rate_limit_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("5000"));
        headers.insert("x-ratelimit-path", HeaderValue::from_static("/v2/venues/X"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));

        let rate = RateLimit::from_headers(&headers);
        assert_eq!(
            rate,
            RateLimit {
                limit: 5000,
                remaining: 4999,
                path: "/v2/venues/X".to_string(),
            }
        );
        assert!(!rate.is_exhausted());
    }

    #[test]
    fn test_missing_header_is_zero() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("5000"));

        let rate = RateLimit::from_headers(&headers);
        assert_eq!(rate.limit, 5000);
        assert_eq!(rate.remaining, 0);
        assert_eq!(rate.path, "");
        assert!(rate.is_exhausted());
    }

    #[test]
    fn test_non_numeric_header_is_zero() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("lots"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("-3"));

        let rate = RateLimit::from_headers(&headers);
        assert_eq!(rate.limit, 0);
        assert_eq!(rate.remaining, 0);
        assert!(!rate.is_exhausted());
    }

    #[test]
    fn test_empty_headers() {
        assert_eq!(RateLimit::from_headers(&HeaderMap::new()), RateLimit::default());
    }
}
