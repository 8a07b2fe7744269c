//! Error page substitution
//!
//! 403/404/500 responses prefer a `{code}.html` document placed at the
//! site root; anything going wrong while reading one falls back to the
//! built-in minimal response. The fallback path cannot itself fail.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::handler::resolver::ErrorStatus;
use crate::http::response;

/// Respond with the custom page for `status` when one exists at the site
/// root, the built-in fallback otherwise.
pub async fn respond(root: &Path, status: ErrorStatus) -> Response<Full<Bytes>> {
    match load_custom_page(root, status).await {
        Some(content) => response::build_error_page_response(status.code(), content),
        None => response::build_fallback_error_response(status.code(), status.reason()),
    }
}

/// Bytes of `<root>/<code>.html`, if present and readable. Read failures
/// of any kind collapse to `None`.
async fn load_custom_page(root: &Path, status: ErrorStatus) -> Option<Vec<u8>> {
    fs::read(root.join(format!("{}.html", status.code()))).await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::fs as std_fs;
    use tempfile::TempDir;

    async fn body_of(resp: Response<Full<Bytes>>) -> Vec<u8> {
        resp.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[tokio::test]
    async fn custom_page_served_verbatim_with_status() {
        let dir = TempDir::new().unwrap();
        let page = b"<html><body>custom not found</body></html>".to_vec();
        std_fs::write(dir.path().join("404.html"), &page).unwrap();

        let resp = respond(dir.path(), ErrorStatus::NotFound).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(body_of(resp).await, page);
    }

    #[tokio::test]
    async fn missing_custom_page_falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();

        let resp = respond(dir.path(), ErrorStatus::NotFound).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_of(resp).await, b"404 Not Found");
    }

    #[tokio::test]
    async fn each_status_picks_its_own_page() {
        let dir = TempDir::new().unwrap();
        std_fs::write(dir.path().join("403.html"), "no entry").unwrap();
        std_fs::write(dir.path().join("500.html"), "broke").unwrap();

        let resp = respond(dir.path(), ErrorStatus::Forbidden).await;
        assert_eq!(resp.status(), 403);
        assert_eq!(body_of(resp).await, b"no entry");

        let resp = respond(dir.path(), ErrorStatus::Internal).await;
        assert_eq!(resp.status(), 500);
        assert_eq!(body_of(resp).await, b"broke");
    }
}
