//! Request Logger
//!
//! Middleware logging each request (method, URL, headers, body) before the
//! handler runs and the response (status, body) after it.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::ApiError;

/// Largest request body the logger will buffer (1 MiB)
pub const MAX_LOGGED_BODY: usize = 1024 * 1024;

/// Logs the request and its response around the wrapped handler.
pub async fn log_request(req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(
                "Request: method: [{}], url: {}: failed to read body: {}",
                parts.method, parts.uri, e
            );
            return ApiError::InvalidRequest("Request body too large or unreadable".to_string())
                .into_response();
        }
    };

    let method = parts.method.clone();
    let uri = parts.uri.clone();
    let request_line = format!(
        "Request: method: [{}], url: {}, headers: {:?}, body: {}",
        method,
        uri,
        parts.headers,
        String::from_utf8_lossy(&bytes)
    );
    info!("{}", request_line);

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{}:: failed to read response body: {}", request_line, e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let status = parts.status;
    let body_text = String::from_utf8_lossy(&bytes);
    if status.is_client_error() || status.is_server_error() {
        error!(
            "{}:: Response: status_code = {}, content = {}",
            request_line,
            status.as_u16(),
            body_text
        );
    } else {
        info!(
            "{}:: Response: status_code = {}, content = {}",
            request_line,
            status.as_u16(),
            body_text
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
