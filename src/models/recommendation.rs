use serde::{Deserialize, Serialize};

use super::{Genre, Platform};

/// One ranked game, produced fresh for every request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    /// None when the game is missing from the genre table
    pub genre: Option<Genre>,
    pub age_rating: u8,
    /// Additive heuristic score, clamped to [0.0, 1.0]
    pub relevance: f64,
    pub platforms: Vec<Platform>,
}

/// Full output of one recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationSet {
    /// Sorted by relevance descending, ties by name ascending
    pub recommendations: Vec<Recommendation>,
    /// Natural-language explanation of how the list was assembled
    pub rationale: String,
    pub total_found: usize,
    /// Diagnostic: size of the age-eligible set before intersection
    pub age_eligible_count: usize,
    /// Diagnostic: size of the genre-eligible set before intersection
    pub genre_eligible_count: usize,
}

impl RecommendationSet {
    /// The highest-scored recommendation, when any exist
    pub fn top_pick(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}
