use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

/// One structured event per routed request.
///
/// Installed with `route_layer` so the matched route is known.
/// The route template (`/assessment/{group}/{field}`) is logged next to the
/// concrete path. Server errors log at `warn`. Bodies are never logged: they
/// carry personal data from the assessment form.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let span = tracing::info_span!("request", %method, %route);
    let started = Instant::now();
    let response = next.run(req).instrument(span.clone()).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let _entered = span.enter();
    let status = response.status();
    if status.is_server_error() {
        tracing::warn!(path = %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(path = %path, status = status.as_u16(), elapsed_ms, "request handled");
    }

    response
}
