use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::http::mime::MimeTable;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// The directory tree the server is permitted to expose.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub root: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem (optional) layered with
    /// `SERVER_*` environment variables and built-in defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("site.root", ".")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Per-process state shared by every request. Immutable after startup, so
/// it travels behind a plain `Arc` with no locking.
pub struct AppState {
    pub config: Config,
    /// Canonical absolute site root; the boundary every resolved file
    /// must stay under.
    pub root: PathBuf,
    pub mime: MimeTable,
}

impl AppState {
    /// Canonicalize the site root up front so per-request boundary checks
    /// compare against an absolute, symlink-free prefix.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = std::fs::canonicalize(&config.site.root).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("site root '{}' is not accessible: {e}", config.site.root),
            )
        })?;

        Ok(Self {
            config,
            root,
            mime: MimeTable::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_file() {
        let cfg = Config::load_from("definitely-missing-config").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.site.root, ".");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn socket_addr_parses_defaults() {
        let cfg = Config::load_from("definitely-missing-config").unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn app_state_canonicalizes_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut cfg = Config::load_from("definitely-missing-config").unwrap();
        cfg.site.root = dir.path().to_string_lossy().into_owned();

        let state = AppState::new(cfg).unwrap();
        assert!(state.root.is_absolute());
    }

    #[test]
    fn app_state_rejects_missing_root() {
        let mut cfg = Config::load_from("definitely-missing-config").unwrap();
        cfg.site.root = "/definitely/not/a/real/site/root".into();
        assert!(AppState::new(cfg).is_err());
    }
}
