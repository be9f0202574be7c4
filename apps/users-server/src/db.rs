use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use runtime::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use url::Url;

const MEMORY_DSN: &str = "sqlite::memory:";

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// - Keeps "sqlite::memory:" as-is.
/// - Normalizes backslashes into forward slashes (important on Windows).
pub fn absolutize_sqlite_dsn(dsn: &str, base_dir: &Path, create_dirs: bool) -> Result<String> {
    if dsn.eq_ignore_ascii_case(MEMORY_DSN) || dsn.eq_ignore_ascii_case("sqlite://:memory:") {
        return Ok(MEMORY_DSN.to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("DSN must start with sqlite:// (got: {})", dsn))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(anyhow!("Empty SQLite path in DSN"));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    if let Some(dir) = p.parent() {
        if create_dirs {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create database dir '{}'", dir.display()))?;
        }
    }

    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    Ok(out)
}

/// Reject DSNs this build cannot connect to.
pub fn detect_from_dsn(cfg: &DatabaseConfig) -> Result<&'static str> {
    let raw = cfg.url.trim();
    if raw.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }

    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid database DSN '{}': {}", raw, e))?;

    match url.scheme() {
        "sqlite" | "sqlite3" => Ok("sqlite"),
        other => Err(anyhow!("Unsupported database type: {}", other)),
    }
}

/// Open the connection pool; `mock` swaps the configured DSN for in-memory SQLite.
pub async fn connect(
    cfg: Option<&DatabaseConfig>,
    base_dir: &Path,
    mock: bool,
) -> Result<DatabaseConnection> {
    let mut opts = if mock {
        let mut opts = ConnectOptions::new(MEMORY_DSN);
        // every pooled connection would otherwise see its own empty database
        opts.max_connections(1).min_connections(1);
        opts
    } else {
        let cfg = cfg.ok_or_else(|| {
            anyhow!("Database configuration is required (use --mock for an in-memory database)")
        })?;
        detect_from_dsn(cfg)?;
        let dsn = absolutize_sqlite_dsn(cfg.url.trim(), base_dir, true)?;
        let mut opts = ConnectOptions::new(dsn);
        opts.max_connections(cfg.max_conns.unwrap_or(10));
        opts.acquire_timeout(Duration::from_secs(cfg.acquire_timeout_sec.unwrap_or(5)));
        opts
    };
    opts.sqlx_logging(false);

    tracing::info!("Connecting to database: {}", opts.get_url());
    let db = Database::connect(opts)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected DB backend: {:?}", db.get_database_backend());
    Ok(db)
}
