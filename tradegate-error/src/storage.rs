use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DbError(#[from] sea_orm::DbErr),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// A write collided with a uniqueness rule (unique key, single CTA).
    #[error("integrity conflict on `{field}`: {message}")]
    IntegrityConflict { field: String, message: String },
}
