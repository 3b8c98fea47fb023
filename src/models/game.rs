use serde::{Deserialize, Serialize};

use super::{Difficulty, Genre, Platform, Popularity};

/// A catalog game assembled from the independent catalog tables
///
/// Difficulty and popularity are optional: the source tables only cover a
/// subset of the library, and an absent entry is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    /// Unique name, the lookup key across every catalog table
    pub name: String,
    /// Exactly one genre per game
    pub genre: Genre,
    /// Minimum recommended age
    pub min_age: u8,
    pub difficulty: Option<Difficulty>,
    pub popularity: Option<Popularity>,
    pub platforms: Vec<Platform>,
}
