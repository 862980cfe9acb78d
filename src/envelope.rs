//! The JSON envelope every Foursquare response is wrapped in.
//!
//! ```json
//! {
//!   "meta": { "code": 200, "requestId": "..." },
//!   "notifications": [{ "type": "notificationTray", "item": { "unreadCount": 0 } }],
//!   "response": { "venue": { ... } }
//! }
//! ```
//!
//! The envelope is decoded in two passes. [`Envelope::decode`] reads `meta`
//! and keeps `response` as an untyped tree; once the endpoint is known,
//! [`Envelope::decode_payload`] decodes one sub-tree of it strongly.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request status reported by Foursquare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    /// Mirrors the HTTP status of the response; `200` on success.
    pub code: u16,

    /// Machine-readable error kind, e.g. `param_error`.
    pub error_type: Option<String>,

    /// Human-readable error description.
    pub error_detail: Option<String>,

    /// Identifier Foursquare assigned to the request.
    pub request_id: Option<String>,
}

impl Meta {
    /// Returns the error detail, or `""` when absent.
    pub fn error_detail(&self) -> &str {
        self.error_detail.as_deref().unwrap_or_default()
    }

    /// Returns the error type, or `""` when absent.
    pub fn error_type(&self) -> &str {
        self.error_type.as_deref().unwrap_or_default()
    }

    /// Returns `true` if the meta block reports success on its own.
    pub fn is_success(&self) -> bool {
        self.code == 200 && self.error_detail().is_empty()
    }
}

/// A notification attached to a response.
///
/// Item shapes vary by notification type and are left untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    /// Notification type, e.g. `notificationTray`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Notification body.
    pub item: Value,
}

/// The loosely decoded outer response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    /// Request status.
    pub meta: Meta,

    /// Notifications attached to the response.
    pub notifications: Vec<Notification>,

    /// The endpoint-specific payload, kept untyped.
    pub response: Value,
}

impl Envelope {
    /// Parses the envelope from a raw response body.
    ///
    /// Unknown fields are ignored. A missing `meta` decodes to code `0`.
    ///
    /// # Errors
    ///
    /// Fails when the body is not a well-formed JSON object.
    pub fn decode(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Decodes the payload sub-tree at `path` into `T`.
    ///
    /// An empty path decodes the whole payload. A missing or `null` node
    /// yields `T::default()`; a node of the wrong shape is an error. Object
    /// members set to `null` are treated as absent, so they take their zero
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use foursquare::envelope::Envelope;
    ///
    /// let body = br#"{"meta":{"code":200},"response":{"photos":{"count":2}}}"#;
    /// let envelope = Envelope::decode(body).unwrap();
    ///
    /// let count: u32 = envelope.decode_payload(&["photos", "count"]).unwrap();
    /// assert_eq!(count, 2);
    ///
    /// let missing: Vec<String> = envelope.decode_payload(&["tips", "items"]).unwrap();
    /// assert!(missing.is_empty());
    /// ```
    pub fn decode_payload<T>(&self, path: &[&str]) -> serde_json::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let mut node = &self.response;
        for key in path {
            match node.get(key) {
                Some(next) => node = next,
                None => return Ok(T::default()),
            }
        }

        if node.is_null() {
            return Ok(T::default());
        }

        T::deserialize(without_nulls(node))
    }
}

/// Copies `value`, dropping object members whose value is `null`.
fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), without_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(without_nulls).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_envelope() {
        let body = br#"{
            "meta": {"code": 200, "requestId": "59a45921351e3d43b07028b5"},
            "notifications": [{"type": "notificationTray", "item": {"unreadCount": 3}}],
            "response": {"venue": {"id": "abc"}}
        }"#;

        let envelope = Envelope::decode(body).unwrap();
        assert_eq!(envelope.meta.code, 200);
        assert!(envelope.meta.is_success());
        assert_eq!(
            envelope.meta.request_id.as_deref(),
            Some("59a45921351e3d43b07028b5")
        );
        assert_eq!(envelope.notifications.len(), 1);
        assert_eq!(envelope.notifications[0].kind, "notificationTray");
        assert_eq!(envelope.notifications[0].item["unreadCount"], 3);
        assert_eq!(envelope.response["venue"]["id"], "abc");
    }

    #[test]
    fn test_decode_error_envelope_without_response() {
        let body = br#"{"meta":{"code":400,"errorType":"param_error","errorDetail":"Must provide either geographic location or near a place name"}}"#;

        let envelope = Envelope::decode(body).unwrap();
        assert_eq!(envelope.meta.code, 400);
        assert_eq!(envelope.meta.error_type(), "param_error");
        assert!(!envelope.meta.is_success());
        assert!(envelope.response.is_null());
        assert!(envelope.notifications.is_empty());
    }

    #[test]
    fn test_missing_meta_is_zero_code() {
        let envelope = Envelope::decode(br#"{"response":{}}"#).unwrap();
        assert_eq!(envelope.meta, Meta::default());
        assert!(!envelope.meta.is_success());
    }

    #[test]
    fn test_malformed_body_fails() {
        assert!(Envelope::decode(b"<html>Bad Gateway</html>").is_err());
        assert!(Envelope::decode(b"").is_err());
        assert!(Envelope::decode(b"[1, 2]").is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = br#"{"meta":{"code":200,"shard":7},"extra":true,"response":{}}"#;
        let envelope = Envelope::decode(body).unwrap();
        assert!(envelope.meta.is_success());
    }

    #[test]
    fn test_error_detail_alone_signals_failure() {
        let meta = Meta {
            code: 200,
            error_detail: Some("Quota exceeded".to_string()),
            ..Default::default()
        };
        assert!(!meta.is_success());
    }

    #[test]
    fn test_decode_payload_wrong_shape_is_error() {
        let envelope = Envelope::decode(br#"{"meta":{"code":200},"response":{"venues":"nope"}}"#)
            .unwrap();
        let result: serde_json::Result<Vec<Value>> = envelope.decode_payload(&["venues"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_payload_empty_path_is_whole_payload() {
        let envelope =
            Envelope::decode(br#"{"meta":{"code":200},"response":{"a":1}}"#).unwrap();
        let whole: Value = envelope.decode_payload(&[]).unwrap();
        assert_eq!(whole["a"], 1);
    }

    #[test]
    fn test_decode_payload_null_members_take_defaults() {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct Item {
            name: String,
            count: u64,
            tags: Vec<String>,
        }

        let envelope = Envelope::decode(
            br#"{"meta":{"code":200},"response":{"items":[{"name":null,"count":3,"tags":null}]}}"#,
        )
        .unwrap();
        let items: Vec<Item> = envelope.decode_payload(&["items"]).unwrap();
        assert_eq!(items[0].name, "");
        assert_eq!(items[0].count, 3);
        assert!(items[0].tags.is_empty());
    }
}
