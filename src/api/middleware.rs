//! Per-request hooks plugged into the tower-http layers: the tracing span
//! and access log, the panic response, and the request counters.

use std::any::Any;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Span;

use super::error::ApiError;
use super::state::AppState;

pub const REQUEST_ID: &str = "x-request-id";

/// Span for `TraceLayer`, tagged with the id set by `SetRequestIdLayer`.
pub fn make_span(req: &Request) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        request_id,
        method = %req.method(),
        path = %req.uri().path(),
    )
}

/// Access log line, level chosen by status class.
pub fn on_response(res: &Response, latency: Duration, _span: &Span) {
    let status = res.status().as_u16();
    let latency_ms = latency.as_secs_f64() * 1000.0;

    if res.status().is_server_error() {
        tracing::error!(status, latency_ms, "request failed");
    } else if res.status().is_client_error() {
        tracing::warn!(status, latency_ms, "request rejected");
    } else {
        tracing::info!(status, latency_ms, "request completed");
    }
}

/// `CatchPanicLayer` handler: log the payload, answer with the error envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::Internal("Terjadi kesalahan internal server".to_string()).into_response()
}

pub async fn record_metrics(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    state.metrics.record_request(response.status().as_u16());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{self, StatusCode};

    #[tokio::test]
    async fn test_panic_response_is_error_envelope() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_make_span_accepts_missing_id() {
        let req = http::Request::builder().uri("/health").body(Body::empty()).unwrap();
        let _span = make_span(&req);
    }
}
