use anyhow::{Context, Result};
use axum::Router;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use users_registry::{UsersRegistry, UsersRegistryConfig, MODULE_NAME};

mod db;
mod request_id;
mod shutdown;
mod web;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Users Server - user records over HTTP with validation and an age rule
#[derive(Parser)]
#[command(name = "users-server")]
#[command(about = "Users Server - user records over HTTP with validation and an age rule")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI args passed down to config/app
    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;

    // Apply CLI overrides (port / verbosity)
    config.apply_cli_overrides(&args);

    // Initialize logging
    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Users Server starting");

    // Print config and exit if requested
    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Execute command
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config, args).await,
        Commands::Check => check_config(config, args),
    }
}

async fn run_server(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Initializing modules...");

    let module_cfg: UsersRegistryConfig = config.module_config(MODULE_NAME)?;

    // Base dir for resolving relative sqlite paths (already absolute & created)
    let base_dir = PathBuf::from(&config.server.home_dir);
    let conn = db::connect(config.database.as_ref(), &base_dir, args.mock).await?;
    UsersRegistry::migrate(&conn).await?;

    let registry = UsersRegistry::init(module_cfg, conn);
    let app = web::build_router(registry.register_rest(Router::new()), &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind address {}", addr))?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown::wait_for_shutdown().await {
                tracing::error!("Failed to listen for shutdown signals: {}", e);
            }
            tracing::info!("Shutdown signal received");
        })
        .await
        .context("HTTP server failed")?;

    tracing::info!("Users Server stopped");
    Ok(())
}

fn check_config(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Checking configuration...");

    // AppConfig::load_* already normalized & created home_dir
    let module_cfg: UsersRegistryConfig = config.module_config(MODULE_NAME)?;
    tracing::info!("users_registry: min_age={}", module_cfg.min_age);

    if !args.mock {
        let db_cfg = config
            .database
            .as_ref()
            .context("Database configuration is required (use --mock for an in-memory database)")?;
        let backend = db::detect_from_dsn(db_cfg)?;
        tracing::info!("Database backend: {}", backend);
    }

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}
