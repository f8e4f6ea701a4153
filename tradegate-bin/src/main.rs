use clap::Parser;
use std::{env::current_dir, path::PathBuf};
use tokio::signal;
use tradegate_common::Logger;
use tradegate_error::{SiteError, SiteResult};
use tradegate_models::{constants::DEFAULT_CONFIG_FILE_NAME, settings::Settings};
use tradegate_storage::DbManager;
use tradegate_web::SiteServer;
use tracing::info;

/// TradeGate website server
///
/// Serves the public marketing site, the contact-inquiry intake and the
/// admin content-management API from a single process backed by an embedded
/// SQLite database (or any configured database URL).
#[derive(Parser)]
#[command(name = "tradegate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TradeGate website server", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server will look for 'tradegate.toml'
    /// in the current working directory.
    #[arg(short, long, env = "TRADEGATE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> SiteResult<()> {
    let cli = Cli::parse();

    // Determine the configuration file path
    // If not provided via CLI or environment variable, use default path
    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| SiteError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(config_path.to_string_lossy().to_string())?;

    let mut logger = Logger::from_level_str(&settings.log.level, settings.log.directory.clone());
    logger.initialize()?;

    info!(config = %config_path.display(), "Starting tradegate");

    // Connect, migrate and seed the content store.
    let db_manager = DbManager::init(&settings).await?;
    let db = db_manager.get_connection()?;

    // Start serving; the handle is kept for graceful shutdown.
    let server = SiteServer::init(&settings, db).await?;

    shutdown_signal().await?;
    info!("Shutdown signal received, stopping...");

    server.stop().await?;
    db_manager.close().await?;

    info!("Shutdown complete");
    Ok(())
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> SiteResult<()> {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .map_err(|e| SiteError::from(format!("Failed to install Ctrl+C handler: {e}")))
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(|e| SiteError::from(format!("Failed to install SIGTERM handler: {e}")))?
            .recv()
            .await;
        Ok::<_, SiteError>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<SiteResult<()>>();

    tokio::select! {
        res = ctrl_c => { res?; },
        res = terminate => { res?; },
    }

    Ok(())
}
