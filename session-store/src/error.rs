use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Token must be a non-empty string")]
    EmptyToken,

    #[error("User record has no recognized role")]
    UnrecognizedRole,

    #[error("Session store is already initialized")]
    AlreadyInitialized,

    #[error("Persistence error: {0}")]
    Persistence(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
