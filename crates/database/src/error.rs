use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the catalog, linking and review services.
///
/// `Validation` and `NotFound` are checked before any store mutation, so a
/// failing call never leaves a partial write behind.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
