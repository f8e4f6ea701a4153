use thiserror::Error;

/// Error type for startup/bootstrap operations.
#[derive(Error, Debug)]
pub enum InitError {
    /// Returned when a required component is missing from the runtime wiring
    #[error("component not available: {0}")]
    ComponentUnavailable(String),
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}
