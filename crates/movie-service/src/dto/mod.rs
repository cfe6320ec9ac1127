//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs, with `validator` rules where the shape alone decides validity
//! - Response DTOs for serializing API outputs
//!
//! Entity/DTO conversion that needs settings or lookups lives in
//! [`crate::converters`].

pub mod requests;
pub mod responses;

pub use requests::{
    ChangeRoleRequest, CreateBanRequest, FilmRequest, RateFilmRequest, RegisterRequest,
    SignInRequest, UpdateBanRequest, UpdateUserRequest,
};

pub use responses::{
    ApiResponse, BanDto, ErrorPageResponse, FilmDto, FormField, FormResponse, HealthChecks,
    HealthResponse, PaginatedResponse, PaginationMeta, ReadinessResponse, ScoreDto,
    SessionResponse, UserDto,
};
