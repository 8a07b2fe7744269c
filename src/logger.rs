use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;
use std::path::Path;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, root: &Path) {
    println!("======================================");
    println!("Static site server started");
    println!("Serving directory: {}", root.display());
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

/// List the top-level HTML documents with the URLs they are reachable
/// from. `index.html` answers at the bare root, everything else also at
/// its extensionless alias.
pub fn log_available_pages(root: &Path, addr: &SocketAddr) {
    let Ok(entries) = std::fs::read_dir(root) else {
        return;
    };

    let mut pages: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".html") || name.ends_with(".htm"))
        .collect();

    if pages.is_empty() {
        return;
    }
    pages.sort();

    println!("Available pages:");
    for page in pages {
        if page == "index.html" {
            println!("  http://{addr}/          (home)");
        } else {
            let alias = page.trim_end_matches(".html").trim_end_matches(".htm");
            println!("  http://{addr}/{alias}  or  http://{addr}/{page}");
        }
    }
    println!();
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] [Connection] Accepted from: {peer_addr}", timestamp());
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] [Request] {method} {uri} {version:?}", timestamp());
}

pub fn log_response(status: u16, body_bytes: usize) {
    println!("[{}] [Response] {status} ({body_bytes} bytes)", timestamp());
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[{}] [ERROR] Failed to serve connection: {err:?}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [WARN] {message}", timestamp());
}

pub fn log_shutdown() {
    println!("\n[{}] Server shutting down...", timestamp());
}
