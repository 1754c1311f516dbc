//! Shared HTTP response helpers for the resource clients.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`ClientError::Api`] with the backend's
//! `{message, code}` body) and JSON decoding so the task and comment modules
//! stay focused on request construction.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ClientError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`ClientError::Api`]. A JSON error body
///   contributes its `message` and `code`; anything else is kept verbatim.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ClientError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let (message, code) = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => (parsed.message, parsed.code),
            Err(_) if body.trim().is_empty() => (
                status.canonical_reason().unwrap_or("request failed").to_string(),
                None,
            ),
            Err(_) => (body, None),
        };
        return Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        });
    }
    Ok(resp)
}

/// Check the response and decode its JSON body.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let resp = check_response(resp).await?;
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Check the response and discard its body.
pub async fn expect_empty(resp: reqwest::Response) -> Result<(), ClientError> {
    check_response(resp).await.map(drop)
}

/// Append percent-encoded query parameters to `url`.
pub fn with_query(url: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return url.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_json_error_body() {
        let resp = mock_response(404, r#"{"message": "Task not found", "code": "TASK_ERR_01"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("TASK_ERR_01"));
                assert_eq!(message, "Task not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_plain_text_body() {
        let resp = mock_response(500, "upstream exploded");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 500, code: None, ref message } if message == "upstream exploded"
        ));
    }

    #[tokio::test]
    async fn check_response_empty_body_uses_reason() {
        let resp = mock_response(503, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 503, ref message, .. } if message == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(204, "");
        assert!(expect_empty(resp).await.is_ok());
    }

    #[tokio::test]
    async fn decode_reports_parse_errors() {
        let resp = mock_response(200, "{not json");
        let err = decode::<serde_json::Value>(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn query_values_are_encoded() {
        let url = with_query(
            "http://x/tasks",
            &[("page", "1".to_string()), ("search", "milk & eggs".to_string())],
        );
        assert_eq!(url, "http://x/tasks?page=1&search=milk%20%26%20eggs");
        assert_eq!(with_query("http://x/tasks", &[]), "http://x/tasks");
    }
}
