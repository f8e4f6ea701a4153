pub mod init;
pub mod mail;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitError;
use mail::MailError;
use sea_orm::{DbErr, TransactionError};
use serde_json::Error as SerdeJsonError;
use std::{error::Error as StdError, io::Error as IoError};
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use web::WebError;

pub type SiteResult<T, E = SiteError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum SiteError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    StdError(#[from] Box<dyn StdError + Send + Sync>),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    MailError(#[from] MailError),
    #[error("{0}")]
    InitError(#[from] InitError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("template error: {0}")]
    TemplateError(#[from] tera::Error),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Initialization error: {0}")]
    InitializationError(String),
    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}

impl From<String> for SiteError {
    #[inline]
    fn from(e: String) -> Self {
        SiteError::Msg(e)
    }
}

impl From<&str> for SiteError {
    #[inline]
    fn from(e: &str) -> Self {
        SiteError::Msg(e.to_string())
    }
}

impl From<DbErr> for SiteError {
    #[inline]
    fn from(e: DbErr) -> Self {
        SiteError::StorageError(StorageError::DbError(e))
    }
}

impl From<TransactionError<SiteError>> for SiteError {
    #[inline]
    fn from(e: TransactionError<SiteError>) -> Self {
        SiteError::Msg(e.to_string())
    }
}
