use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::{mail::MailError, storage::StorageError, SiteError};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    /// Validation failure scoped to a single field. The field name is carried
    /// so API clients can attach the message to the offending input.
    #[error("Invalid `{field}`: {message}")]
    FieldInvalid { field: String, message: String },
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("Forbidden: `{0}`")]
    Forbidden(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError: `{0}`")]
    StorageError(#[from] StorageError),
    #[error("TemplateError: `{0}`")]
    TemplateError(String),
}

impl WebError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        WebError::FieldInvalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<tera::Error> for WebError {
    fn from(e: tera::Error) -> Self {
        WebError::TemplateError(e.to_string())
    }
}

impl From<MailError> for WebError {
    fn from(e: MailError) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<SiteError> for WebError {
    fn from(e: SiteError) -> Self {
        match e {
            SiteError::StorageError(StorageError::EntityNotFound(msg)) => WebError::NotFound(msg),
            SiteError::StorageError(StorageError::IntegrityConflict { field, message }) => {
                WebError::FieldInvalid { field, message }
            }
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.to_string()
        });
        match self {
            WebError::Unauthorized => {
                body["error"] = json!("Unauthorized");
                HttpResponse::Unauthorized().json(body)
            }
            WebError::BadRequest(_) => {
                body["error"] = json!("Bad Request");
                HttpResponse::BadRequest().json(body)
            }
            WebError::FieldInvalid { field, message } => {
                body["error"] = json!("Bad Request");
                body["field"] = json!(field);
                body["message"] = json!(message);
                HttpResponse::BadRequest().json(body)
            }
            WebError::NotFound(_) => {
                body["error"] = json!("Not Found");
                HttpResponse::NotFound().json(body)
            }
            WebError::Forbidden(_) => {
                body["error"] = json!("Forbidden");
                HttpResponse::Forbidden().json(body)
            }
            WebError::InternalError(_) | WebError::TemplateError(_) => {
                body["error"] = json!("Internal Server Error");
                HttpResponse::InternalServerError().json(body)
            }
            WebError::StorageError(StorageError::IntegrityConflict { field, message }) => {
                body["error"] = json!("Bad Request");
                body["field"] = json!(field);
                body["message"] = json!(message);
                HttpResponse::BadRequest().json(body)
            }
            WebError::StorageError(_) => {
                body["error"] = json!("Storage Error");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}
