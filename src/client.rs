//! Foursquare client and its builder.
//!
//! The [`Client`] type is the entry point for every endpoint. Use
//! [`ClientBuilder`] to configure and create clients.

use crate::{
    classify::{classify, decode_error},
    config::{ClientConfig, Credentials, DEFAULT_BASE_URL, DEFAULT_MODE, DEFAULT_VERSION},
    query::{authenticate, Query},
    transport::Transport,
    venues::VenueService,
    Error, Response, Result,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A Foursquare API client.
///
/// The client is cheap to clone; clones share one immutable configuration and
/// one connection pool, so a single client can serve many concurrent tasks.
///
/// # Examples
///
/// ```no_run
/// use foursquare::{Client, venues::SearchParams};
///
/// # async fn example() -> Result<(), foursquare::Error> {
/// let client = Client::builder()
///     .client_credentials("client-id", "client-secret")
///     .build()?;
///
/// let venue = client.venues().details("40a55d80f964a52020f31ee3").await?;
/// println!("{} ({} checkins)", venue.data.name, venue.data.stats.checkins_count);
///
/// let results = client
///     .venues()
///     .search(&SearchParams::near("Chicago, IL").query("pizza"))
///     .await?;
/// for venue in results.data.iter() {
///     println!("{}", venue.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    transport: Transport,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client with the default base URL and version.
    ///
    /// Pass either a client id and secret or an access token; empty strings
    /// count as absent. When both are given the access token is used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if no usable credentials were given.
    ///
    /// # Examples
    ///
    /// ```
    /// use foursquare::Client;
    ///
    /// let client = Client::new("foursquare", "client-id", "client-secret", "").unwrap();
    /// assert!(!client.config().has_access_token());
    /// ```
    pub fn new(
        mode: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .mode(mode)
            .client_id(client_id)
            .client_secret(client_secret)
            .access_token(access_token)
            .build()
    }

    /// Returns the configuration shared by every request.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns the venue endpoints.
    pub fn venues(&self) -> VenueService<'_> {
        VenueService::new(self)
    }

    /// Requests any path relative to the base URL and returns the raw payload.
    ///
    /// The path may carry its own query string. Authentication, version and
    /// mode parameters are added as for every other call, and the response is
    /// classified the same way.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: foursquare::Client) -> Result<(), foursquare::Error> {
    /// let response = client.raw_request("venues/trending?ll=40.7,-74&limit=5").await?;
    /// println!("{}", response.data["venues"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request(&self, path: &str) -> Result<Response<Value>> {
        let (path, query_string) = match path.split_once('?') {
            Some((path, query)) => (path, query),
            None => (path, ""),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(Error::Validation("request path is required".to_string()));
        }

        let query: Query = url::form_urlencoded::parse(query_string.as_bytes())
            .into_owned()
            .collect();

        self.fetch(&segments, query, &[]).await
    }

    /// Fails with [`Error::Precondition`] unless an access token is configured.
    pub(crate) fn require_access_token(&self, endpoint: &str) -> Result<()> {
        if self.inner.config.has_access_token() {
            Ok(())
        } else {
            Err(Error::Precondition(format!(
                "{} requires an acting user; configure an access token",
                endpoint
            )))
        }
    }

    /// Runs the shared request path and decodes the payload at `payload_path`.
    ///
    /// `segments` are appended to the base URL and percent-encoded.
    pub(crate) async fn fetch<T>(
        &self,
        segments: &[&str],
        query: Query,
        payload_path: &[&str],
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.endpoint_url(segments)?;
        let query = authenticate(&self.inner.config, query);

        let outcome = self.inner.transport.get(url, &query).await;
        if let Err(e) = &outcome {
            tracing::debug!(error = %e, timeout = e.is_timeout(), "Transport failure");
        }

        let (raw, envelope) = classify(outcome)?;

        match envelope.decode_payload(payload_path) {
            Ok(data) => Ok(Response::new(data, raw, envelope)),
            Err(e) => Err(decode_error(raw, &e)),
        }
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::ConfigurationError("Base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use foursquare::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), foursquare::Error> {
/// let client = ClientBuilder::new()
///     .access_token("user-access-token")
///     .version("20180323")
///     .timeout(Duration::from_secs(10))
///     .default_header("Accept-Language", "de")?
///     .max_concurrent_requests(4)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    version: String,
    mode: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    max_concurrent_requests: Option<usize>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            version: DEFAULT_VERSION.to_string(),
            mode: DEFAULT_MODE.to_string(),
            client_id: None,
            client_secret: None,
            access_token: None,
            default_headers: HeaderMap::new(),
            timeout: None,
            http_client: None,
            max_concurrent_requests: None,
        }
    }

    /// Sets the API root. Defaults to `https://api.foursquare.com/v2/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot carry a path.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL cannot have a path: {}",
                url
            )));
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Sets the API version token sent as `v`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the response mode token sent as `m`, `foursquare` or `swarm`.
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Sets the application's client id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the application's client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the client id and secret used for userless access.
    pub fn client_credentials(
        self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id(client_id).client_secret(client_secret)
    }

    /// Sets a user access token. Takes precedence over client credentials.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Adds a header sent with every request, e.g. `Accept-Language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses an existing `reqwest::Client` instead of building one.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Caps how many requests may be in flight at once across all clones.
    ///
    /// `1` serializes every request. Values below `1` are treated as `1`.
    pub fn max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = Some(limit);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable credentials were provided, the version or
    /// mode is empty, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let credentials = Credentials::resolve(
            self.client_id.as_deref(),
            self.client_secret.as_deref(),
            self.access_token.as_deref(),
        )
        .ok_or_else(|| {
            Error::ConfigurationError(
                "Either an access token or a client id and secret is required".to_string(),
            )
        })?;

        if self.version.is_empty() {
            return Err(Error::ConfigurationError("Version is required".to_string()));
        }
        if self.mode.is_empty() {
            return Err(Error::ConfigurationError("Mode is required".to_string()));
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build().map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                config: ClientConfig {
                    base_url,
                    version: self.version,
                    mode: self.mode,
                    credentials,
                },
                transport: Transport::new(
                    http_client,
                    self.default_headers,
                    self.timeout,
                    self.max_concurrent_requests,
                ),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        Client::builder()
            .base_url(base)
            .unwrap()
            .client_credentials("ci", "cs")
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_requires_credentials() {
        let err = Client::builder().build().unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));

        let err = Client::builder().client_id("ci").build().unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn test_build_defaults() {
        let client = Client::new("foursquare", "ci", "cs", "").unwrap();
        let config = client.config();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.version, DEFAULT_VERSION);
        assert_eq!(config.mode, "foursquare");
        assert!(!config.has_access_token());
    }

    #[test]
    fn test_access_token_wins_over_client_credentials() {
        let client = Client::new("swarm", "ci", "cs", "tok").unwrap();
        assert!(client.config().has_access_token());
        assert!(client.require_access_token("here_now").is_ok());
    }

    #[test]
    fn test_require_access_token_without_token() {
        let err = client(DEFAULT_BASE_URL)
            .require_access_token("here_now")
            .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn test_endpoint_url_joins_and_escapes_segments() {
        let url = client("https://api.foursquare.com/v2/")
            .endpoint_url(&["venues", "a/b c", "photos"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.foursquare.com/v2/venues/a%2Fb%20c/photos"
        );

        let url = client("http://127.0.0.1:8080/v2")
            .endpoint_url(&["venues", "categories"])
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v2/venues/categories");
    }

    #[test]
    fn test_base_url_must_be_hierarchical() {
        let err = Client::builder().base_url("mailto:someone@example.com");
        assert!(matches!(err, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn test_default_header_validation() {
        let result = Client::builder().default_header("bad header", "x");
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }
}
