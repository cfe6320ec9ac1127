//! Film entity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::value_objects::Id;

/// MPAA-style age rating
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRating {
    G,
    PG,
    PG13,
    R,
    NC17,
}

impl AgeRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::G => "G",
            Self::PG => "PG",
            Self::PG13 => "PG13",
            Self::R => "R",
            Self::NC17 => "NC17",
        }
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown age rating: {0}")]
pub struct UnknownAgeRating(pub String);

impl FromStr for AgeRating {
    type Err = UnknownAgeRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Self::G),
            "PG" => Ok(Self::PG),
            "PG13" => Ok(Self::PG13),
            "R" => Ok(Self::R),
            "NC17" => Ok(Self::NC17),
            other => Err(UnknownAgeRating(other.to_string())),
        }
    }
}

/// Stored film. The average score is derived from scores, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    /// Running time in minutes
    pub length: i32,
    pub age_rating: AgeRating,
    /// Poster file name
    pub poster: Option<String>,
}

/// Data for inserting or replacing a film
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFilm {
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub length: i32,
    pub age_rating: AgeRating,
    pub poster: Option<String>,
}
