//! Request path resolution
//!
//! Maps a raw request target onto a file under the site root, or an error
//! status. Every traversal and boundary check lives here: a resolved
//! `File` never names anything outside the root directory.

use std::path::{Path, PathBuf};

use crate::http::percent;

/// Statuses a request can fail with before any file is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    Forbidden,
    NotFound,
    Internal,
}

impl ErrorStatus {
    pub const fn code(self) -> u16 {
        match self {
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::Internal => "Internal Server Error",
        }
    }
}

/// Outcome of resolving one request path.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// An existing regular file at or below the site root.
    File(PathBuf),
    /// The request cannot be served; respond with this status.
    Error(ErrorStatus),
}

/// Resolve a raw request target against the site root.
///
/// `root` must already be canonical (see `AppState::new`); the boundary
/// check compares canonical paths component-wise.
pub fn resolve(root: &Path, raw_target: &str) -> ResolvedTarget {
    match normalize(root, raw_target) {
        Ok(request_path) => locate(root, &request_path),
        Err(status) => ResolvedTarget::Error(status),
    }
}

/// Strip query/fragment, percent-decode, and apply the root and
/// extensionless substitutions. Produces the final decoded request path.
fn normalize(root: &Path, raw_target: &str) -> Result<String, ErrorStatus> {
    // Query string and fragment never participate in file lookup.
    let without_query = raw_target.split(['?', '#']).next().unwrap_or_default();

    let decoded = percent::decode(without_query).map_err(|_| ErrorStatus::Internal)?;

    // The bare root serves the site index.
    if decoded.is_empty() || decoded == "/" {
        return Ok("/index.html".to_string());
    }

    // Friendly URLs: an extensionless path resolves to its `.html` twin
    // when that twin exists under the root.
    let last_segment = decoded.rsplit('/').next().unwrap_or_default();
    if !last_segment.contains('.') {
        let candidate = format!("{decoded}.html");
        if root.join(candidate.trim_start_matches('/')).exists() {
            return Ok(candidate);
        }
    }

    Ok(decoded)
}

/// Traversal rejection, root join, canonical boundary check, and the
/// regular-file check.
fn locate(root: &Path, request_path: &str) -> ResolvedTarget {
    // Textual check on the decoded path, before any filesystem access.
    // The canonical boundary check below is the authoritative one; this
    // one also fires on filenames merely containing `..` as text.
    if request_path.contains("..") {
        return ResolvedTarget::Error(ErrorStatus::Forbidden);
    }

    let joined = root.join(request_path.trim_start_matches('/'));

    // Canonicalization fails for paths that do not exist.
    let Ok(canonical) = joined.canonicalize() else {
        return ResolvedTarget::Error(ErrorStatus::NotFound);
    };

    // Equal to the root or strictly below it. Symlinks pointing out of
    // the tree land here after canonicalization.
    if !canonical.starts_with(root) {
        return ResolvedTarget::Error(ErrorStatus::Forbidden);
    }

    if canonical.is_file() {
        ResolvedTarget::File(canonical)
    } else {
        ResolvedTarget::Error(ErrorStatus::NotFound)
    }
}
