//! # movie-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `movie-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations with soft delete
//!
//! ## Usage
//!
//! ```rust,ignore
//! use movie_db::pool::{create_pool, DatabaseConfig};
//! use movie_db::repositories::PgUserRepository;
//! use movie_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     let total = user_repo.count().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, migrations_dir, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgBanRepository, PgFilmRepository, PgScoreRepository, PgUserRepository};
