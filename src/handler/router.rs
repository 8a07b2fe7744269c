//! Request orchestration module
//!
//! One route exists: the filesystem under the site root. Each request
//! moves through normalization, resolution, and response assembly, and
//! every failure mode ends as a 403/404/500 response rather than an
//! error escaping the handler.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::resolver::{self, ErrorStatus, ResolvedTarget};
use crate::handler::{error_pages, static_files};
use crate::http::response;
use crate::logger;

/// Main entry point for HTTP request handling.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // GET is the whole protocol surface here.
    if method != Method::GET {
        logger::log_warning(&format!("Method not implemented: {method}"));
        return Ok(response::build_not_implemented_response());
    }

    let resp = match resolver::resolve(&state.root, uri.path()) {
        ResolvedTarget::File(path) => match static_files::load(&state, &path).await {
            Ok((content, content_type)) => static_files::build_response(content, content_type),
            Err(e) => {
                logger::log_error(&format!("Failed to read '{}': {e}", path.display()));
                error_pages::respond(&state.root, ErrorStatus::Internal).await
            }
        },
        ResolvedTarget::Error(status) => {
            if status == ErrorStatus::Forbidden {
                logger::log_warning(&format!("Blocked request outside site root: {}", uri.path()));
            }
            error_pages::respond(&state.root, status).await
        }
    };

    if access_log {
        let body_bytes = resp
            .headers()
            .get("Content-Length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        logger::log_response(resp.status().as_u16(), body_bytes);
    }

    Ok(resp)
}
