//! Decides whether a completed exchange succeeded.
//!
//! Classification runs in a fixed order:
//!
//! 1. a transport failure is returned as [`Error::Transport`] and the body is
//!    never looked at;
//! 2. a body that is not a valid envelope is an [`Error::Decode`];
//! 3. an HTTP status other than 200, a `meta.code` other than 200, or a
//!    non-empty `meta.errorDetail` is an [`Error::Api`];
//! 4. anything else is a success.

use crate::envelope::{Envelope, Meta};
use crate::rate_limit::RateLimit;
use crate::transport::RawResponse;
use crate::{ApiErrorType, Error, Result};
use http::StatusCode;

/// Classifies the outcome of one transport call.
///
/// On success returns the raw exchange together with its decoded envelope so
/// the endpoint can decode its payload.
///
/// # Errors
///
/// Returns the classified error as described in the module documentation.
pub fn classify(
    outcome: std::result::Result<RawResponse, reqwest::Error>,
) -> Result<(RawResponse, Envelope)> {
    let raw = outcome?;

    let envelope = match Envelope::decode(&raw.body) {
        Ok(envelope) => envelope,
        Err(e) => return Err(decode_error(raw, &e)),
    };

    if raw.status != StatusCode::OK || !envelope.meta.is_success() {
        return Err(api_error(raw, envelope.meta));
    }

    Ok((raw, envelope))
}

/// Builds a [`Error::Decode`] for a body that did not match the expected shape.
pub(crate) fn decode_error(raw: RawResponse, error: &serde_json::Error) -> Error {
    tracing::debug!(
        error = %error,
        status = raw.status.as_u16(),
        url = %raw.url,
        "Failed to decode response"
    );

    Error::Decode {
        raw_response: raw.body_text(),
        serde_error: error.to_string(),
        status: raw.status,
    }
}

fn api_error(raw: RawResponse, meta: Meta) -> Error {
    let error_type = ApiErrorType::from(meta.error_type());

    tracing::debug!(
        status = raw.status.as_u16(),
        code = meta.code,
        error_type = %error_type,
        request_id = meta.request_id.as_deref().unwrap_or_default(),
        url = %raw.url,
        "API reported failure"
    );

    Error::Api {
        status: raw.status,
        code: meta.code,
        rate_limit: RateLimit::from_headers(&raw.headers),
        error_detail: meta.error_detail.unwrap_or_default(),
        error_type,
        request_id: meta.request_id,
        url: raw.url,
        headers: Box::new(raw.headers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};
    use std::time::Duration;
    use url::Url;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
            url: Url::parse("https://api.foursquare.com/v2/venues/search?near=NYC").unwrap(),
            latency: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_success() {
        let (raw, envelope) = classify(Ok(raw(
            200,
            r#"{"meta":{"code":200,"errorDetail":""},"response":{"venues":[]}}"#,
        )))
        .unwrap();

        assert_eq!(raw.status, StatusCode::OK);
        assert!(envelope.response["venues"].is_array());
    }

    #[test]
    fn test_error_detail_with_http_200_is_api_error() {
        let result = classify(Ok(raw(
            200,
            r#"{"meta":{"code":200,"errorType":"other","errorDetail":"Something odd"},"response":{}}"#,
        )));

        match result {
            Err(Error::Api {
                status,
                code,
                error_type,
                error_detail,
                ..
            }) => {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(code, 200);
                assert_eq!(error_type, ApiErrorType::Other);
                assert_eq!(error_detail, "Something odd");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_http_400_with_meta_is_api_error() {
        let mut response = raw(
            400,
            r#"{"meta":{"code":400,"errorType":"param_error","errorDetail":"Must provide either geographic location or near a place name","requestId":"r-1"},"response":{}}"#,
        );
        response
            .headers
            .insert("x-ratelimit-remaining", HeaderValue::from_static("17"));

        match classify(Ok(response)) {
            Err(Error::Api {
                status,
                code,
                error_type,
                error_detail,
                request_id,
                url,
                rate_limit,
                ..
            }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(code, 400);
                assert_eq!(error_type, ApiErrorType::ParamError);
                assert_eq!(
                    error_detail,
                    "Must provide either geographic location or near a place name"
                );
                assert_eq!(request_id.as_deref(), Some("r-1"));
                assert_eq!(url.path(), "/v2/venues/search");
                assert_eq!(rate_limit.remaining, 17);
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_200_meta_code_with_http_200_is_api_error() {
        let result = classify(Ok(raw(200, r#"{"meta":{"code":500},"response":{}}"#)));
        assert!(matches!(result, Err(Error::Api { code: 500, .. })));
    }

    #[test]
    fn test_http_error_with_ok_meta_is_api_error() {
        let result = classify(Ok(raw(503, r#"{"meta":{"code":200},"response":{}}"#)));
        assert!(matches!(
            result,
            Err(Error::Api { status, .. }) if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[test]
    fn test_malformed_body_is_decode_error_even_on_http_error() {
        let result = classify(Ok(raw(502, "<html>Bad Gateway</html>")));

        match result {
            Err(Error::Decode {
                raw_response,
                status,
                ..
            }) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(raw_response, "<html>Bad Gateway</html>");
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_meta_is_api_error() {
        let result = classify(Ok(raw(200, r#"{"response":{"venue":{}}}"#)));
        assert!(matches!(result, Err(Error::Api { code: 0, .. })));
    }

    #[test]
    fn test_invalid_utf8_body_is_decode_error() {
        let mut response = raw(200, "");
        response.body =
            b"{\"meta\":{\"code\":200},\"response\":{\"venue\":{\"name\":\"Caf\xe9\"}}}".to_vec();

        match classify(Ok(response)) {
            Err(Error::Decode { raw_response, .. }) => {
                assert!(raw_response.contains("Caf\u{FFFD}"));
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }
}
