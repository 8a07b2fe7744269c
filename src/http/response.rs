//! HTTP response building module
//!
//! Builders for the handful of responses this server emits. Construction
//! cannot panic: a builder failure is logged and a bare response returned
//! in its place.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the 200 response for a served file.
pub fn build_file_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build an error response carrying a custom error page's exact bytes.
pub fn build_error_page_response(status: u16, content: Vec<u8>) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("error page", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the minimal built-in error response used when no custom page
/// exists (or reading one failed).
pub fn build_fallback_error_response(status: u16, reason: &'static str) -> Response<Full<Bytes>> {
    let body = format!("{status} {reason}");
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("fallback error", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build the 501 response for any method other than GET.
pub fn build_not_implemented_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(501)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("501 Not Implemented")))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::from("501 Not Implemented")))
        })
}

/// Log response build error
fn log_build_error(what: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {what} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_response_carries_type_and_length() {
        let resp = build_file_response(b"hello".to_vec(), "text/plain; charset=utf-8");
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "5");
    }

    #[test]
    fn error_page_response_is_html() {
        let resp = build_error_page_response(404, b"<h1>gone</h1>".to_vec());
        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn fallback_error_response_has_status_line_body() {
        let resp = build_fallback_error_response(403, "Forbidden");
        assert_eq!(resp.status(), 403);
    }

    #[test]
    fn non_get_methods_get_501() {
        let resp = build_not_implemented_response();
        assert_eq!(resp.status(), 501);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET");
    }
}
