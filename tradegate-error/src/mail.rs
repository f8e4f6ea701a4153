use thiserror::Error;

/// Errors raised while building or sending a notification email.
///
/// These are never allowed to fail a user-visible request; the intake flow
/// catches them, logs the inquiry id and degrades to a warning.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("mail transport disabled")]
    Disabled,

    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("message build failure: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("mail send timed out after {0} ms")]
    Timeout(u64),
}
