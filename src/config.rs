//! Immutable client configuration.

use std::fmt;
use url::Url;

/// Default API root. Endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://api.foursquare.com/v2/";

/// Default API version token, sent as `v`.
pub const DEFAULT_VERSION: &str = "20180323";

/// Default response mode token, sent as `m`.
pub const DEFAULT_MODE: &str = "foursquare";

/// How requests are authenticated.
///
/// Exactly one credential set is ever sent. An access token identifies an
/// acting user and unlocks user-only endpoints such as
/// [`VenueService::here_now`](crate::venues::VenueService::here_now).
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Userless access with an application's client id and secret.
    Client {
        /// The application's client id
        id: String,
        /// The application's client secret
        secret: String,
    },
    /// Authenticated access on behalf of a user.
    AccessToken(String),
}

impl Credentials {
    /// Picks the credential set to use; a non-empty access token always wins.
    ///
    /// Returns `None` when neither an access token nor a complete client
    /// id/secret pair is available.
    pub fn resolve(
        client_id: Option<&str>,
        client_secret: Option<&str>,
        access_token: Option<&str>,
    ) -> Option<Self> {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(token) = non_empty(access_token) {
            return Some(Credentials::AccessToken(token));
        }

        match (non_empty(client_id), non_empty(client_secret)) {
            (Some(id), Some(secret)) => Some(Credentials::Client { id, secret }),
            _ => None,
        }
    }

    /// Returns `true` if requests are made on behalf of a user.
    pub fn has_access_token(&self) -> bool {
        matches!(self, Credentials::AccessToken(_))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Client { id, .. } => f
                .debug_struct("Client")
                .field("id", id)
                .field("secret", &"<redacted>")
                .finish(),
            Credentials::AccessToken(_) => f.debug_tuple("AccessToken").field(&"<redacted>").finish(),
        }
    }
}

/// Settings shared read-only by every request a [`Client`](crate::Client) makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root that endpoint paths are joined onto. Always ends with `/`.
    pub base_url: Url,

    /// Version token sent as `v`.
    pub version: String,

    /// Mode token sent as `m`.
    pub mode: String,

    /// The credential set sent with every request.
    pub credentials: Credentials,
}

impl ClientConfig {
    /// Returns `true` if an acting user is configured.
    pub fn has_access_token(&self) -> bool {
        self.credentials.has_access_token()
    }
}
