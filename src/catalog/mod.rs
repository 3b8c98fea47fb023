//! Static game catalog
//!
//! An immutable snapshot built once at startup and shared by reference for
//! the lifetime of the process. Five independent indices answer every query;
//! nothing here mutates after construction.

use std::collections::{HashMap, HashSet};

use crate::error::{AppError, AppResult};
use crate::models::{Difficulty, Game, Genre, Platform, Popularity};

mod library;

/// Age rating assumed for games absent from the ratings table.
/// An unlisted game is treated as adults-only on purpose.
pub const DEFAULT_AGE_RATING: u8 = 18;

/// Read-only catalog of games, indexed five ways
pub struct Catalog {
    by_genre: HashMap<Genre, Vec<String>>,
    age_ratings: HashMap<String, u8>,
    by_difficulty: HashMap<Difficulty, HashSet<String>>,
    by_popularity: HashMap<Popularity, HashSet<String>>,
    by_platform: HashMap<Platform, HashSet<String>>,
    // Derived reverse index; the genre table is the source of truth
    genre_index: HashMap<String, Genre>,
}

impl Catalog {
    /// Builds the catalog from the compiled-in library
    pub fn with_default_library() -> AppResult<Self> {
        Self::from_tables(
            library::GENRE_GAMES,
            library::AGE_RATINGS,
            library::DIFFICULTY_TIERS,
            library::POPULARITY_TIERS,
            library::PLATFORM_GAMES,
        )
    }

    /// Builds a catalog from explicit seed tables
    ///
    /// Tables are independent: names may appear in the difficulty, popularity
    /// or platform tables without a genre entry, and lookups for such names
    /// fall back to defaults. The genre table itself must be non-empty and
    /// assign at most one genre per name.
    pub fn from_tables(
        genres: &[(Genre, &[&str])],
        ages: &[(&str, u8)],
        difficulties: &[(Difficulty, &[&str])],
        popularities: &[(Popularity, &[&str])],
        platforms: &[(Platform, &[&str])],
    ) -> AppResult<Self> {
        if genres.is_empty() {
            return Err(AppError::Catalog("genre table is empty".to_string()));
        }

        let mut by_genre: HashMap<Genre, Vec<String>> = HashMap::new();
        let mut genre_index: HashMap<String, Genre> = HashMap::new();

        for (genre, names) in genres {
            let entry = by_genre.entry(*genre).or_default();
            for name in *names {
                if let Some(existing) = genre_index.insert((*name).to_string(), *genre) {
                    return Err(AppError::Catalog(format!(
                        "game '{}' is indexed under both {} and {}",
                        name, existing, genre
                    )));
                }
                entry.push((*name).to_string());
            }
        }

        let age_ratings = ages
            .iter()
            .map(|(name, age)| ((*name).to_string(), *age))
            .collect();

        Ok(Self {
            by_genre,
            age_ratings,
            by_difficulty: collect_tiers(difficulties),
            by_popularity: collect_tiers(popularities),
            by_platform: collect_tiers(platforms),
            genre_index,
        })
    }

    /// Games tagged with the given genre; empty for an unpopulated genre
    pub fn games_in_genre(&self, genre: Genre) -> &[String] {
        self.by_genre.get(&genre).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All games whose minimum age rating does not exceed `age`
    ///
    /// Monotonic: raising the age never removes a game from the result.
    pub fn games_within_age(&self, age: u8) -> HashSet<String> {
        self.age_ratings
            .iter()
            .filter(|(_, min_age)| **min_age <= age)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn games_with_difficulty(&self, tier: Difficulty) -> HashSet<String> {
        self.by_difficulty.get(&tier).cloned().unwrap_or_default()
    }

    pub fn games_with_popularity(&self, tier: Popularity) -> HashSet<String> {
        self.by_popularity.get(&tier).cloned().unwrap_or_default()
    }

    /// Genre of a game, or None when the name is not in the genre table
    pub fn genre_of(&self, name: &str) -> Option<Genre> {
        self.genre_index.get(name).copied()
    }

    /// Age rating of a game, defaulting to adults-only for unknown names
    pub fn age_rating_of(&self, name: &str) -> u8 {
        self.age_ratings
            .get(name)
            .copied()
            .unwrap_or(DEFAULT_AGE_RATING)
    }

    /// Platforms carrying the game, in declaration order
    pub fn platforms_of(&self, name: &str) -> Vec<Platform> {
        Platform::ALL
            .iter()
            .filter(|platform| {
                self.by_platform
                    .get(platform)
                    .is_some_and(|games| games.contains(name))
            })
            .copied()
            .collect()
    }

    /// Genres with at least one game, in canonical declaration order
    pub fn all_genres(&self) -> Vec<Genre> {
        Genre::ALL
            .iter()
            .filter(|genre| self.by_genre.contains_key(genre))
            .copied()
            .collect()
    }

    /// Every genre-indexed game, sorted by name
    pub fn all_games(&self) -> Vec<String> {
        let mut games: Vec<String> = self.genre_index.keys().cloned().collect();
        games.sort();
        games
    }

    /// Assembles the full record for a genre-indexed game
    pub fn game(&self, name: &str) -> Option<Game> {
        let genre = self.genre_of(name)?;
        Some(Game {
            name: name.to_string(),
            genre,
            min_age: self.age_rating_of(name),
            difficulty: self.tier_of(&self.by_difficulty, name),
            popularity: self.tier_of(&self.by_popularity, name),
            platforms: self.platforms_of(name),
        })
    }

    fn tier_of<T: Copy>(&self, index: &HashMap<T, HashSet<String>>, name: &str) -> Option<T> {
        index
            .iter()
            .find(|(_, games)| games.contains(name))
            .map(|(tier, _)| *tier)
    }
}

fn collect_tiers<T: Copy + Eq + std::hash::Hash>(
    table: &[(T, &[&str])],
) -> HashMap<T, HashSet<String>> {
    table
        .iter()
        .map(|(tier, names)| {
            (
                *tier,
                names.iter().map(|name| (*name).to_string()).collect(),
            )
        })
        .collect()
}
