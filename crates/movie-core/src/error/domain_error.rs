//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Id, PageRequestError, Violations};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Ban not found: {0}")]
    BanNotFound(Id),

    #[error("Film not found: {0}")]
    FilmNotFound(Id),

    #[error("Score not found: {0}")]
    ScoreNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Ban creation rejected; carries every broken rule
    #[error("{0}")]
    CreateValidation(Violations),

    /// Ban update rejected
    #[error("{0}")]
    UpdateValidation(Violations),

    /// User registration rejected
    #[error("{0}")]
    RegistrationValidation(Violations),

    #[error("Invalid page request: {0}")]
    InvalidPage(#[from] PageRequestError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("User is banned")]
    UserBanned,

    #[error("Admin role required")]
    AdminRequired,

    #[error("Not allowed to modify this resource")]
    NotOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User with such email already exists")]
    EmailAlreadyExists,

    #[error("User with such login already exists")]
    LoginAlreadyExists,

    #[error("Film already scored by this user")]
    AlreadyScored,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BanNotFound(_) => "UNKNOWN_BAN",
            Self::FilmNotFound(_) => "UNKNOWN_FILM",
            Self::ScoreNotFound(_) => "UNKNOWN_SCORE",

            // Validation
            Self::CreateValidation(_) => "CREATE_VALIDATION_ERROR",
            Self::UpdateValidation(_) => "UPDATE_VALIDATION_ERROR",
            Self::RegistrationValidation(_) => "REGISTRATION_VALIDATION_ERROR",
            Self::InvalidPage(_) => "INVALID_PAGE",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authorization
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserBanned => "USER_BANNED",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotOwner => "NOT_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::LoginAlreadyExists => "LOGIN_ALREADY_EXISTS",
            Self::AlreadyScored => "ALREADY_SCORED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Structured violations, if this is a rule-based validation failure
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::CreateValidation(v)
            | Self::UpdateValidation(v)
            | Self::RegistrationValidation(v) => Some(v),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BanNotFound(_)
                | Self::FilmNotFound(_)
                | Self::ScoreNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::CreateValidation(_)
                | Self::UpdateValidation(_)
                | Self::RegistrationValidation(_)
                | Self::InvalidPage(_)
                | Self::ValidationError(_)
        )
    }

    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::UserBanned)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired | Self::NotOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::LoginAlreadyExists | Self::AlreadyScored
        )
    }
}
