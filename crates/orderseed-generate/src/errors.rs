use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("failed to read identifiers from {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("identifier pool '{0}' is empty")]
    EmptyPool(String),
    #[error("no unused email after {attempts} attempts")]
    EmailsExhausted { attempts: u32 },
    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
