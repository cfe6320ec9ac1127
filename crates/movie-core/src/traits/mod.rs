//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    BanRepository, FilmRepository, RepoResult, ScoreRepository, UserRepository,
};
