//! Query string construction.
//!
//! Foursquare carries everything, including authentication, in the query
//! string. Endpoint methods build a [`Query`] from their parameters and
//! [`authenticate`] merges in the fixed version, mode and credential keys.

use crate::config::{ClientConfig, Credentials};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Version token key.
pub const PARAM_VERSION: &str = "v";
/// Mode token key.
pub const PARAM_MODE: &str = "m";
/// Client id key.
pub const PARAM_CLIENT_ID: &str = "client_id";
/// Client secret key.
pub const PARAM_CLIENT_SECRET: &str = "client_secret";
/// Access token key.
pub const PARAM_OAUTH_TOKEN: &str = "oauth_token";

/// Keys a caller is never allowed to set directly.
const CREDENTIAL_KEYS: [&str; 4] = [
    PARAM_CLIENT_ID,
    PARAM_CLIENT_SECRET,
    PARAM_OAUTH_TOKEN,
    "access_token",
];

/// Keys whose values are hidden in diagnostic URLs.
pub(crate) const SECRET_KEYS: [&str; 3] = [PARAM_CLIENT_SECRET, PARAM_OAUTH_TOKEN, "access_token"];

/// An ordered set of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, String>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens a parameter struct into a query.
    ///
    /// The struct is serialized with `serde`; `None` fields and empty strings
    /// are skipped, booleans become `1`/`0`, and lists are comma-joined as
    /// Foursquare expects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationFailed`] if the value is not a flat struct.
    ///
    /// # Examples
    ///
    /// ```
    /// use foursquare::query::Query;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Params {
    ///     ll: Option<String>,
    ///     limit: Option<u32>,
    ///     #[serde(rename = "categoryId")]
    ///     category_id: Vec<String>,
    /// }
    ///
    /// let query = Query::from_params(&Params {
    ///     ll: Some("40.7,-74".to_string()),
    ///     limit: None,
    ///     category_id: vec!["a".to_string(), "b".to_string()],
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(query.get("ll"), Some("40.7,-74"));
    /// assert_eq!(query.get("limit"), None);
    /// assert_eq!(query.get("categoryId"), Some("a,b"));
    /// ```
    pub fn from_params<P: Serialize>(params: &P) -> Result<Self> {
        let value = serde_json::to_value(params)
            .map_err(|e| Error::SerializationFailed(e.to_string()))?;

        let fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(Error::SerializationFailed(format!(
                    "expected a struct of parameters, got {}",
                    other
                )))
            }
        };

        let mut query = Self::new();
        for (key, value) in fields {
            if let Some(value) = flatten_value(&key, value)? {
                query.params.insert(key, value);
            }
        }
        Ok(query)
    }

    /// Adds a parameter, replacing any previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn remove(&mut self, key: &str) {
        self.params.remove(key);
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_value(key: &str, value: Value) -> Result<Option<String>> {
    Ok(match value {
        Value::Null => None,
        Value::Bool(b) => Some(if b { "1" } else { "0" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if let Some(part) = flatten_value(key, item)? {
                    parts.push(part);
                }
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(","))
            }
        }
        Value::Object(_) => {
            return Err(Error::SerializationFailed(format!(
                "parameter `{}` is a nested object",
                key
            )))
        }
    })
}

/// Merges the fixed version, mode and credential parameters into a caller query.
///
/// Caller-supplied credential keys are dropped and the fixed keys overwrite
/// any caller value, so exactly one credential set is ever sent.
pub fn authenticate(config: &ClientConfig, mut query: Query) -> Query {
    for key in CREDENTIAL_KEYS {
        query.remove(key);
    }

    query.insert(PARAM_VERSION, config.version.as_str());
    query.insert(PARAM_MODE, config.mode.as_str());

    match &config.credentials {
        Credentials::AccessToken(token) => {
            query.insert(PARAM_OAUTH_TOKEN, token.as_str());
        }
        Credentials::Client { id, secret } => {
            query.insert(PARAM_CLIENT_ID, id.as_str());
            query.insert(PARAM_CLIENT_SECRET, secret.as_str());
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn config(credentials: Credentials) -> ClientConfig {
        ClientConfig {
            base_url: Url::parse(crate::config::DEFAULT_BASE_URL).unwrap(),
            version: "20180323".to_string(),
            mode: "swarm".to_string(),
            credentials,
        }
    }

    fn client_credentials() -> Credentials {
        Credentials::Client {
            id: "ci".to_string(),
            secret: "cs".to_string(),
        }
    }

    #[test]
    fn test_empty_query_gets_fixed_params() {
        let query = authenticate(&config(client_credentials()), Query::new());

        let expected: Query = [
            ("v", "20180323"),
            ("m", "swarm"),
            ("client_id", "ci"),
            ("client_secret", "cs"),
        ]
        .into_iter()
        .collect();
        assert_eq!(query, expected);
    }

    #[test]
    fn test_access_token_replaces_client_credentials() {
        let query = authenticate(
            &config(Credentials::AccessToken("tok".to_string())),
            Query::new().with("limit", "5"),
        );

        assert_eq!(query.get("oauth_token"), Some("tok"));
        assert!(!query.contains("client_id"));
        assert!(!query.contains("client_secret"));
        assert_eq!(query.get("limit"), Some("5"));
    }

    #[test]
    fn test_fixed_params_win_on_collision() {
        let caller = Query::new()
            .with("v", "19990101")
            .with("m", "other")
            .with("near", "Chicago, IL");
        let query = authenticate(&config(client_credentials()), caller);

        assert_eq!(query.get("v"), Some("20180323"));
        assert_eq!(query.get("m"), Some("swarm"));
        assert_eq!(query.get("near"), Some("Chicago, IL"));
    }

    #[test]
    fn test_caller_cannot_inject_credentials() {
        let caller = Query::new()
            .with("oauth_token", "stolen")
            .with("access_token", "stolen")
            .with("client_secret", "spoofed");
        let query = authenticate(&config(client_credentials()), caller);

        assert!(!query.contains("oauth_token"));
        assert!(!query.contains("access_token"));
        assert_eq!(query.get("client_secret"), Some("cs"));
    }

    #[test]
    fn test_from_params_flattens_values() {
        #[derive(Serialize)]
        struct Params {
            near: String,
            radius: Option<u32>,
            offset: Option<u32>,
            #[serde(rename = "openNow")]
            open_now: Option<bool>,
            #[serde(rename = "categoryId")]
            category_id: Vec<String>,
            #[serde(skip)]
            _venue_id: String,
        }

        let query = Query::from_params(&Params {
            near: String::new(),
            radius: Some(250),
            offset: Some(0),
            open_now: Some(true),
            category_id: Vec::new(),
            _venue_id: "abc".to_string(),
        })
        .unwrap();

        let expected: Query = [("radius", "250"), ("offset", "0"), ("openNow", "1")]
            .into_iter()
            .collect();
        assert_eq!(query, expected);
    }

    #[test]
    fn test_from_params_rejects_nested_objects() {
        #[derive(Serialize)]
        struct Inner {
            a: u8,
        }
        #[derive(Serialize)]
        struct Params {
            inner: Inner,
        }

        let err = Query::from_params(&Params { inner: Inner { a: 1 } }).unwrap_err();
        assert!(matches!(err, Error::SerializationFailed(_)));
    }
}
