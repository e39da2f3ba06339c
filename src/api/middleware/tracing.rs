//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, TraceLayer};
use tracing::{Span, info, info_span, warn};

type MakeSpanFn = fn(&Request<Body>) -> Span;
type OnResponseFn = fn(&Response<Body>, Duration, &Span);

/// Trace layer applied to the whole router.
pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn, DefaultOnRequest, OnResponseFn>;

/// Creates the request tracing layer.
///
/// Every request gets an `http` span carrying the method and path (query
/// strings are left out so API keys forwarded by clients never reach the
/// logs). The response is logged with its status and latency; a `5xx`
/// means an essential upstream failed and is logged at `WARN`.
///
/// ```text
/// INFO http{method=GET path=/api/profile}: Response sent status=200 latency_ms=812
/// WARN http{method=GET path=/api/profile}: Profile request failed status=500 latency_ms=95
/// ```
pub fn layer() -> HttpTraceLayer {
    let make_span: MakeSpanFn = request_span;
    let on_response: OnResponseFn = log_response;

    TraceLayer::new_for_http()
        .make_span_with(make_span)
        .on_response(on_response)
}

fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "http",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn log_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    let latency_ms = latency.as_millis() as u64;

    if response.status().is_server_error() {
        warn!(status, latency_ms, "Profile request failed");
    } else {
        info!(status, latency_ms, "Response sent");
    }
}
