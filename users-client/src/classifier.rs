//! Converts raw HTTP calls into [`Outcome`] values.
//!
//! [`call_api`] is the single place where transport failures, malformed
//! bodies and non-2xx statuses are turned into data. It never panics and never
//! returns an error; every non-success, non-aborted result is logged with the
//! caller-supplied label before being handed back.

use crate::error::TransportError;
use crate::outcome::{ApiFailure, Outcome};
use crate::types::HttpResponse;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// "No content" status
pub const EMPTY_RESPONSE: u16 = 204;

/// Sentinel status a transport reports when the caller aborted the request
pub const CODE_REQUEST_ABORTED_BY_USER: u16 = 1;

/// Sentinel status a transport reports when it hit an exception of its own
pub const CODE_REQUEST_ENCOUNTERED_EXCEPTION: u16 = 2;

pub const MESSAGE_REQUEST_ENCOUNTERED_EXCEPTION: &str = "Request encountered an exception";

const BODY_PREVIEW_CHARS: usize = 200;

/// Run one API call and classify its result.
///
/// `label` only identifies the call in log output.
pub async fn call_api<T, F>(label: &str, call: F) -> Outcome<T>
where
    T: DeserializeOwned,
    F: Future<Output = Result<HttpResponse, TransportError>>,
{
    match call.await {
        Ok(response) => classify_response(label, &response),
        Err(err) => classify_error(label, &err),
    }
}

/// Race an outcome-producing future against a cancellation token.
///
/// Cancellation wins even if the call is ready at the same time; the call's
/// result is then dropped.
pub async fn abortable<T, F>(label: &str, token: &CancellationToken, call: F) -> Outcome<T>
where
    F: Future<Output = Outcome<T>>,
{
    tokio::select! {
        biased;
        () = token.cancelled() => {
            info!(api = label, "[{label}] API canceled");
            Outcome::Aborted
        }
        outcome = call => outcome,
    }
}

/// Classify a complete HTTP response
pub fn classify_response<T: DeserializeOwned>(label: &str, response: &HttpResponse) -> Outcome<T> {
    let status = response.status;

    if response.is_success() {
        if status == EMPTY_RESPONSE || response.is_empty_body() {
            info!(api = label, status, "[{label}] API succeeded with Empty Response");
            return Outcome::SuccessEmpty;
        }

        return match serde_json::from_str::<T>(&response.body) {
            Ok(data) => {
                info!(api = label, status, "[{label}] API succeeded");
                Outcome::Success(data)
            }
            Err(err) => failed(label, ApiFailure::parsing(err.to_string())),
        };
    }

    match status {
        CODE_REQUEST_ABORTED_BY_USER => {
            info!(api = label, status, "[{label}] API aborted by user");
            Outcome::Aborted
        }
        CODE_REQUEST_ENCOUNTERED_EXCEPTION => {
            let detail = if response.is_empty_body() {
                MESSAGE_REQUEST_ENCOUNTERED_EXCEPTION.to_string()
            } else {
                preview(&response.body)
            };
            failed(label, ApiFailure::unknown().with_detail(detail))
        }
        _ => failed(label, ApiFailure::http(status, preview(&response.body))),
    }
}

/// Classify a failure raised before a response was available
pub fn classify_error<T>(label: &str, err: &TransportError) -> Outcome<T> {
    let failure = match err {
        TransportError::Cancelled => {
            info!(api = label, "[{label}] API canceled");
            return Outcome::Aborted;
        }
        TransportError::Io(_) => ApiFailure::network(err.to_string()),
        TransportError::Decode(_) => ApiFailure::parsing(err.to_string()),
        TransportError::Request(inner) => classify_reqwest_error(inner),
        TransportError::Other(_) => ApiFailure::unknown().with_detail(err.to_string()),
    };
    failed(label, failure)
}

fn classify_reqwest_error(err: &reqwest::Error) -> ApiFailure {
    if err.is_timeout() || err.is_connect() || err.is_body() || err.is_request() {
        ApiFailure::network(err.to_string())
    } else if err.is_decode() {
        ApiFailure::parsing(err.to_string())
    } else if let Some(status) = err.status() {
        ApiFailure::http(status.as_u16(), err.to_string())
    } else {
        ApiFailure::unknown().with_detail(err.to_string())
    }
}

fn failed<T>(label: &str, failure: ApiFailure) -> Outcome<T> {
    error!(
        api = label,
        status = failure.status,
        detail = failure.detail.as_deref().unwrap_or_default(),
        "[{label}] API failed ({})",
        failure.kind.category()
    );
    Outcome::Error(failure)
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{ErrorKind, HttpErrorClass, MESSAGE_NO_CONNECTION};
    use crate::testing::test_helpers::create_mock_response;
    use serde::Deserialize;
    use std::io;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ping {
        ok: bool,
    }

    async fn call(status: u16, body: &str) -> Outcome<Ping> {
        let response = create_mock_response(status, body);
        call_api("ping", async move { Ok(response) }).await
    }

    async fn call_failing(err: TransportError) -> Outcome<Ping> {
        call_api("ping", async move { Err(err) }).await
    }

    #[tokio::test]
    async fn test_success_with_body() {
        assert_eq!(call(200, r#"{"ok": true}"#).await, Outcome::Success(Ping { ok: true }));
        assert_eq!(call(201, r#"{"ok": false}"#).await, Outcome::Success(Ping { ok: false }));
    }

    #[tokio::test]
    async fn test_no_content_is_success_empty() {
        // A 204 stays empty even if something sneaks into the body
        assert_eq!(call(204, r#"{"ok": true}"#).await, Outcome::SuccessEmpty);
        assert_eq!(call(204, "").await, Outcome::SuccessEmpty);
    }

    #[tokio::test]
    async fn test_empty_body_is_success_empty() {
        assert_eq!(call(200, "").await, Outcome::SuccessEmpty);
        assert_eq!(call(200, "   \n").await, Outcome::SuccessEmpty);
        assert_eq!(call(200, "null").await, Outcome::SuccessEmpty);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parsing_error() {
        let outcome = call(200, r#"{"ok": "#).await;
        let failure = outcome.failure().unwrap();
        assert!(failure.is_parsing_error());
        assert_eq!(failure.status, None);

        let outcome = call(200, r#"{"different": 1}"#).await;
        assert!(outcome.failure().unwrap().is_parsing_error());
    }

    #[tokio::test]
    async fn test_http_errors_keep_status() {
        for status in [400, 401, 404, 409, 422, 499] {
            let outcome = call(status, r#"{"success": false}"#).await;
            let failure = outcome.failure().unwrap();
            assert_eq!(failure.kind, ErrorKind::Http(HttpErrorClass::Client));
            assert_eq!(failure.status, Some(status));
            assert!(failure.is_client_error());
            assert!(!failure.is_server_error());
        }

        for status in [500, 502, 503, 599] {
            let outcome = call(status, "").await;
            let failure = outcome.failure().unwrap();
            assert_eq!(failure.kind, ErrorKind::Http(HttpErrorClass::Server));
            assert_eq!(failure.status, Some(status));
            assert!(failure.is_server_error());
        }

        let outcome = call(304, "").await;
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.kind, ErrorKind::Http(HttpErrorClass::Other));
        assert!(failure.is_http_error());
        assert!(!failure.is_client_error());
    }

    #[tokio::test]
    async fn test_sentinel_statuses() {
        assert_eq!(call(CODE_REQUEST_ABORTED_BY_USER, "").await, Outcome::Aborted);

        let outcome = call(CODE_REQUEST_ENCOUNTERED_EXCEPTION, "").await;
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.kind, ErrorKind::Unknown);
        assert_eq!(
            failure.detail.as_deref(),
            Some(MESSAGE_REQUEST_ENCOUNTERED_EXCEPTION)
        );
    }

    #[tokio::test]
    async fn test_transport_errors() {
        let outcome = call_failing(io::Error::new(io::ErrorKind::TimedOut, "timed out").into()).await;
        let failure = outcome.failure().unwrap();
        assert!(failure.is_network_error());
        assert_eq!(failure.message, MESSAGE_NO_CONNECTION);

        let json_err = serde_json::from_str::<Ping>("nope").unwrap_err();
        let outcome = call_failing(json_err.into()).await;
        assert!(outcome.failure().unwrap().is_parsing_error());

        let outcome = call_failing(TransportError::other("boom")).await;
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.kind, ErrorKind::Unknown);
        assert_eq!(failure.message, "Unknown error");

        assert_eq!(call_failing(TransportError::Cancelled).await, Outcome::Aborted);
    }

    #[tokio::test]
    async fn test_long_error_body_is_truncated() {
        let body = "x".repeat(1000);
        let outcome = call(500, &body).await;
        let detail = outcome.failure().unwrap().detail.clone().unwrap();
        assert_eq!(detail.len(), BODY_PREVIEW_CHARS);
    }

    #[tokio::test]
    async fn test_abortable_cancelled() {
        let token = CancellationToken::new();
        token.cancel();

        let outcome: Outcome<Ping> = abortable("ping", &token, std::future::pending()).await;
        assert_eq!(outcome, Outcome::Aborted);
    }

    #[tokio::test]
    async fn test_abortable_passes_through() {
        let token = CancellationToken::new();
        let outcome = abortable("ping", &token, async { Outcome::Success(3) }).await;
        assert_eq!(outcome, Outcome::Success(3));
    }
}
