/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first, see [`crate::setup_environment`]):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | Listen address |
/// | HTTP_PORT | 4000 | HTTP API port |
/// | DB_PATH | staff.sqlite | SQLite database file (`:memory:` for in-memory) |
/// | ENVIRONMENT | development | `production` switches logs to JSON |
/// | STATIC_DIR | (unset) | Front-end build directory to serve |
/// | LOG_LEVEL | info | Default log level (`RUST_LOG` wins) |
/// | LOG_DIR | (unset) | Enables daily rolling log files |
///
/// # Example
///
/// ```ignore
/// DB_PATH=/data/staff.sqlite HTTP_PORT=8080 cargo run -p staff-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database path
    pub database_path: String,
    /// development | production
    pub environment: String,
    /// Front-end build directory served for non-API paths
    pub static_dir: Option<String>,
    /// Default log level
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            database_path: std::env::var("DB_PATH").unwrap_or_else(|_| "staff.sqlite".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            static_dir: std::env::var("STATIC_DIR").ok().filter(|s| !s.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// In-memory database on an ephemeral port
    ///
    /// Used by tests and embedded setups.
    pub fn in_memory() -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            database_path: ":memory:".into(),
            environment: "test".into(),
            static_dir: None,
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// Override the database path
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Override the static front-end directory
    pub fn with_static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// `host:port` string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Whether this is the production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
