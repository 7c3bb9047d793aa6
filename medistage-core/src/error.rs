// medistage-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedistageError {
    // --- DOMAIN ERRORS (Catalog lookups, procedure set) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Database, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATIVE ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
impl From<std::io::Error> for MedistageError {
    fn from(err: std::io::Error) -> Self {
        MedistageError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<sqlx::Error> for MedistageError {
    fn from(err: sqlx::Error) -> Self {
        MedistageError::Infrastructure(InfrastructureError::from(err))
    }
}
