use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tradegate_error::SiteResult;
use tradegate_models::settings::Db;
use tracing::{info, instrument, log::LevelFilter};

#[instrument(name = "init_db", skip_all)]
/// Initialize the database connection with auto-creation support.
/// The embedded SQLite fallback uses URL parameter mode=rwc so the file is
/// created on first start when auto_create is enabled.
pub async fn init_db(config: &Db) -> SiteResult<DatabaseConnection> {
    let database_url = config.effective_url();

    let mut opts = ConnectOptions::new(&database_url);
    opts.connect_timeout(Duration::from_millis(config.sqlite.timeout))
        .idle_timeout(Duration::from_millis(config.sqlite.idle_timeout))
        .max_lifetime(Duration::from_millis(config.sqlite.max_lifetime))
        .max_connections(config.sqlite.max_connections);

    #[cfg(debug_assertions)]
    {
        opts.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Info);
    }
    #[cfg(not(debug_assertions))]
    {
        opts.sqlx_logging(false)
            .sqlx_logging_level(LevelFilter::Off);
    }

    info!("Connecting to database at: {}", database_url);

    let db = Database::connect(opts).await?;
    // Performance-oriented PRAGMA settings (without WAL) for release builds.
    // WAL is intentionally disabled to remain safe on NFS / network filesystems.
    #[cfg(not(debug_assertions))]
    if database_url.starts_with("sqlite:") {
        use sea_orm::{ConnectionTrait, DbBackend, Statement};
        let _ = db
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA synchronous=NORMAL;".to_string(),
            ))
            .await;
        let _ = db
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA temp_store=MEMORY;".to_string(),
            ))
            .await;
    }
    info!("Successfully connected to database");

    Ok(db)
}
