//! # movie-service
//!
//! Application layer: validators, entity/DTO converters, use-case services
//! and the access-control gate.

pub mod converters;
pub mod dto;
pub mod gate;
pub mod services;
pub mod validation;

#[cfg(test)]
mod testing;

pub use gate::{Access, AccessGate, Command, GateRejection, Principal, RejectReason};
pub use services::{
    AuthService, BanService, FilmService, ScoreService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
