//! Environment-driven configuration, read once at startup.

use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string for the users table. Unset means the
    /// service falls back to the seeded in-memory user list.
    pub dsn: Option<String>,
    pub service: String,
    pub revision: String,
    pub port: u16,
    pub assets_dir: PathBuf,
    pub template_path: PathBuf,
}

pub fn load() -> Result<Config> {
    let dsn = std::env::var("DSN").ok().filter(|s| !s.is_empty());

    let service = std::env::var("K_SERVICE").unwrap_or_else(|_| "???".to_string());
    let revision = std::env::var("K_REVISION").unwrap_or_else(|_| "???".to_string());

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let port: u16 = port
        .parse()
        .with_context(|| format!("Invalid PORT value: {}", port))?;

    let assets_dir = std::env::var("ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets"));

    let template_path = std::env::var("TEMPLATE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./index.html"));

    Ok(Config {
        dsn,
        service,
        revision,
        port,
        assets_dir,
        template_path,
    })
}
