//! Static file serving module
//!
//! Reads resolved files and assembles their 200 responses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::config::AppState;
use crate::http::response;

/// Read a resolved file and pick its content type from the table.
///
/// Resolution already proved `path` names a regular file under the root;
/// a read failure past that point is the caller's internal-error path.
pub async fn load(state: &AppState, path: &Path) -> std::io::Result<(Vec<u8>, &'static str)> {
    let content = fs::read(path).await?;
    let content_type = state.mime.for_path(path);
    Ok((content, content_type))
}

/// Build the 200 response for loaded file content.
pub fn build_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    response::build_file_response(content, content_type)
}
