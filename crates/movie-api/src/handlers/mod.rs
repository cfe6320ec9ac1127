//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod bans;
pub mod error;
pub mod films;
pub mod health;
pub mod scores;
pub mod users;
