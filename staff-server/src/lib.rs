//! Staff Server - employee directory HTTP service
//!
//! # Module layout
//!
//! ```text
//! staff-server/src/
//! ├── core/          # config, state, errors, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # logging, request validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use crate::api::build_app;
pub use crate::core::{AppResult, Config, Server, ServerError, ServerState};
pub use crate::db::DbService;
pub use crate::utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    let dotenv = dotenvy::dotenv();
    let config = Config::from_env();
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.is_production(),
        config.log_dir.as_deref(),
    );

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }
    config
}

pub fn print_banner() {
    println!(
        r#"
   _____ __        ________
  / ___// /_____ _/ __/ __/
  \__ \/ __/ __ `/ /_/ /_
 ___/ / /_/ /_/ / __/ __/
/____/\__/\__,_/_/ /_/
    "#
    );
}
