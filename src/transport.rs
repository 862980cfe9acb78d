//! Single-shot HTTP GET execution.
//!
//! The transport performs exactly one request per call and hands back the raw
//! status, headers and body. It never looks at the body; that is the job of
//! [`classify`](crate::classify).

use crate::query::{Query, SECRET_KEYS};
use http::{HeaderMap, StatusCode};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use url::Url;

/// A completed HTTP exchange, before any interpretation of the body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The response body, exactly as received.
    pub body: Vec<u8>,

    /// The request URL with credentials redacted.
    pub url: Url,

    /// Time from dispatch until the body was fully read.
    pub latency: Duration,
}

impl RawResponse {
    /// Returns the body as text, replacing invalid UTF-8 sequences.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes GET requests through a shared `reqwest::Client`.
#[derive(Debug)]
pub(crate) struct Transport {
    http_client: reqwest::Client,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    limiter: Option<Arc<Semaphore>>,
}

impl Transport {
    pub(crate) fn new(
        http_client: reqwest::Client,
        default_headers: HeaderMap,
        timeout: Option<Duration>,
        max_concurrent_requests: Option<usize>,
    ) -> Self {
        Self {
            http_client,
            default_headers,
            timeout,
            limiter: max_concurrent_requests.map(|n| Arc::new(Semaphore::new(n.max(1)))),
        }
    }

    /// Performs one GET against `url` with `query` appended.
    ///
    /// When a concurrency limit is configured, waits for a free slot first.
    pub(crate) async fn get(
        &self,
        mut url: Url,
        query: &Query,
    ) -> std::result::Result<RawResponse, reqwest::Error> {
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        let redacted = redact(&url);

        let _permit = match &self.limiter {
            Some(limiter) => limiter.acquire().await.ok(),
            None => None,
        };

        tracing::debug!(url = %redacted, "Executing HTTP request");

        let start_time = Instant::now();
        let mut request = self.http_client.get(url);

        for (name, value) in &self.default_headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            path = %redacted.path(),
            "Received HTTP response"
        );

        Ok(RawResponse {
            status,
            headers,
            body,
            url: redacted,
            latency,
        })
    }
}

/// Replaces secret query values so the URL is safe to log or return.
pub(crate) fn redact(url: &Url) -> Url {
    if url.query().is_none() {
        return url.clone();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if SECRET_KEYS.contains(&key.as_ref()) {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
