//! Service layer error type
//!
//! Rule failures stay as [`DomainError`] so their codes reach the API
//! unchanged. The other variants cover input the DTO rules let through and
//! broken wiring.

use movie_common::{domain_status, AppError};
use movie_core::{DomainError, Violations};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Session or hashing failure
    #[error(transparent)]
    App(#[from] AppError),

    /// Request value outside what the operation accepts
    #[error("Validation error: {0}")]
    Validation(String),

    /// A state the validators should have ruled out, or missing wiring
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Stable code for API bodies
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Rule violations behind a validation failure
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => e.violations(),
            _ => None,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
