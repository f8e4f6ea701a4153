mod migration;
mod sql;

pub use migration::{Migrator, MigratorTrait};

use sea_orm::DatabaseConnection;
use sql::sqlite;
use tradegate_error::{init::InitError, storage::StorageError, SiteResult};
use tradegate_models::settings::Settings;
use tracing::{info, instrument};

/// Owns the database connection pool for the process lifetime.
pub struct DbManager {
    db_conn: Option<DatabaseConnection>,
}

impl DbManager {
    #[instrument(name = "init-db-manager", skip_all)]
    pub async fn init(settings: &Settings) -> SiteResult<Self, InitError> {
        let db_conn = {
            let db = sqlite::init_db(&settings.db).await.map_err(|e| {
                InitError::Primitive(format!("Failed to init database: {e}"))
            })?;

            // Run database migrations
            Migrator::up(&db, None).await.map_err(|e| {
                InitError::Primitive(format!("Failed to migrate database: {e}"))
            })?;

            db
        };

        info!("Database manager initialized successfully");
        Ok(DbManager {
            db_conn: Some(db_conn),
        })
    }

    #[inline]
    pub fn get_connection(&self) -> SiteResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[instrument(name = "db_close", skip_all)]
    pub async fn close(&self) -> SiteResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed successfully");
        Ok(())
    }
}
