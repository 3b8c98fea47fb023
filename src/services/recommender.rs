//! Rule-based recommendation ranking
//!
//! Intersects the age-eligible and genre-eligible game sets, widens the pool
//! through fixed fallback strategies when the intersection is empty, and
//! scores every candidate with an additive heuristic.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::{Difficulty, Genre, Popularity, Recommendation, RecommendationSet};

/// Age below which the family-friendly fallback applies and the easy
/// difficulty tier earns the fit bonus
const YOUNG_AGE_CUTOFF: u8 = 16;

/// Genres considered safe to suggest to younger users when nothing matched
const FAMILY_FRIENDLY_GENRES: [Genre; 3] = [Genre::Puzzle, Genre::Racing, Genre::Sports];

// Additive score weights; their natural ceiling is exactly 1.0 and the
// clamp in `relevance` guards any future weight change
const AGE_FIT_WEIGHT: f64 = 0.3;
const GENRE_MATCH_WEIGHT: f64 = 0.4;
const VERY_POPULAR_WEIGHT: f64 = 0.2;
const POPULAR_WEIGHT: f64 = 0.1;
const DIFFICULTY_FIT_WEIGHT: f64 = 0.1;

/// Ranks catalog games against a stated age and genre preference
pub struct Recommender<'a> {
    catalog: &'a Catalog,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Produces the ranked recommendation list for one request
    pub fn recommend(&self, age: u8, preferred_genres: &HashSet<Genre>) -> RecommendationSet {
        let age_eligible = self.catalog.games_within_age(age);
        let genre_eligible = self.genre_eligible(preferred_genres);

        let primary: HashSet<String> = age_eligible
            .intersection(&genre_eligible)
            .cloned()
            .collect();

        let fell_back = primary.is_empty();
        let candidates = if fell_back {
            self.expand_candidates(age, &age_eligible)
        } else {
            primary
        };

        let recommendations = self.rank(candidates, age, preferred_genres);
        let rationale = self.build_rationale(age, preferred_genres, &recommendations);

        tracing::info!(
            age,
            genres = preferred_genres.len(),
            found = recommendations.len(),
            fell_back,
            "recommendation request served"
        );

        RecommendationSet {
            total_found: recommendations.len(),
            recommendations,
            rationale,
            age_eligible_count: age_eligible.len(),
            genre_eligible_count: genre_eligible.len(),
        }
    }

    /// Same ranking over the complement genre set
    ///
    /// Not a separate algorithm: every catalog genre except the excluded ones
    /// is fed through `recommend` unchanged.
    pub fn alternatives(&self, age: u8, excluded_genres: &HashSet<Genre>) -> RecommendationSet {
        let remaining: HashSet<Genre> = self
            .catalog
            .all_genres()
            .into_iter()
            .filter(|genre| !excluded_genres.contains(genre))
            .collect();

        self.recommend(age, &remaining)
    }

    /// Union of games across every preferred genre
    fn genre_eligible(&self, genres: &HashSet<Genre>) -> HashSet<String> {
        genres
            .iter()
            .flat_map(|genre| self.catalog.games_in_genre(*genre))
            .cloned()
            .collect()
    }

    /// Widened candidate pool used when the primary intersection is empty
    ///
    /// Every strategy is intersected with the age-eligible set, so the pool
    /// never suggests a game above the stated age.
    fn expand_candidates(&self, age: u8, age_eligible: &HashSet<String>) -> HashSet<String> {
        let mut expanded = HashSet::new();

        let very_popular = self.catalog.games_with_popularity(Popularity::VeryPopular);
        expanded.extend(age_eligible.intersection(&very_popular).cloned());

        let easy = self.catalog.games_with_difficulty(Difficulty::Easy);
        expanded.extend(age_eligible.intersection(&easy).cloned());

        if age < YOUNG_AGE_CUTOFF {
            let family: HashSet<Genre> = FAMILY_FRIENDLY_GENRES.into_iter().collect();
            let family_games = self.genre_eligible(&family);
            expanded.extend(age_eligible.intersection(&family_games).cloned());
        }

        tracing::debug!(pool = expanded.len(), "fallback expansion applied");

        expanded
    }

    /// Scores and orders the candidate pool
    fn rank(
        &self,
        candidates: HashSet<String>,
        age: u8,
        preferred_genres: &HashSet<Genre>,
    ) -> Vec<Recommendation> {
        let very_popular = self.catalog.games_with_popularity(Popularity::VeryPopular);
        let popular = self.catalog.games_with_popularity(Popularity::Popular);
        let easy = self.catalog.games_with_difficulty(Difficulty::Easy);
        let medium = self.catalog.games_with_difficulty(Difficulty::Medium);

        let mut ranked: Vec<Recommendation> = candidates
            .into_iter()
            .map(|name| {
                let relevance = self.relevance(
                    &name,
                    age,
                    preferred_genres,
                    &very_popular,
                    &popular,
                    &easy,
                    &medium,
                );
                Recommendation {
                    genre: self.catalog.genre_of(&name),
                    age_rating: self.catalog.age_rating_of(&name),
                    platforms: self.catalog.platforms_of(&name),
                    relevance,
                    name,
                }
            })
            .collect();

        // Score descending; equal scores fall back to name ascending so the
        // ordering is stable across runs
        ranked.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        ranked
    }

    #[allow(clippy::too_many_arguments)]
    fn relevance(
        &self,
        name: &str,
        age: u8,
        preferred_genres: &HashSet<Genre>,
        very_popular: &HashSet<String>,
        popular: &HashSet<String>,
        easy: &HashSet<String>,
        medium: &HashSet<String>,
    ) -> f64 {
        let mut score = 0.0;

        if self.catalog.age_rating_of(name) <= age {
            score += AGE_FIT_WEIGHT;
        }

        if self
            .catalog
            .genre_of(name)
            .is_some_and(|genre| preferred_genres.contains(&genre))
        {
            score += GENRE_MATCH_WEIGHT;
        }

        if very_popular.contains(name) {
            score += VERY_POPULAR_WEIGHT;
        } else if popular.contains(name) {
            score += POPULAR_WEIGHT;
        }

        let young = age < YOUNG_AGE_CUTOFF;
        if (young && easy.contains(name)) || (!young && medium.contains(name)) {
            score += DIFFICULTY_FIT_WEIGHT;
        }

        score.min(1.0)
    }

    fn build_rationale(
        &self,
        age: u8,
        preferred_genres: &HashSet<Genre>,
        recommendations: &[Recommendation],
    ) -> String {
        let mut parts = Vec::new();

        parts.push(format!(
            "Considering your age ({}), I selected games rated {} or below.",
            age, age
        ));

        if !preferred_genres.is_empty() {
            let mut labels: Vec<&str> = preferred_genres.iter().map(Genre::label).collect();
            labels.sort_unstable();
            parts.push(format!(
                "Based on your genre preferences ({}), I included matching titles.",
                labels.join(", ")
            ));
        }

        if let Some(top) = recommendations.first() {
            parts.push(format!(
                "Found {} suitable games, sorted by relevance.",
                recommendations.len()
            ));
            let genre_label = top.genre.map_or("unknown", |g| g.label());
            parts.push(format!(
                "Top pick: {} ({}) with relevance {:.2}.",
                top.name, genre_label, top.relevance
            ));
        } else {
            parts.push(
                "No exact matches were found, so alternative options are suggested.".to_string(),
            );
        }

        parts.join(" ")
    }
}
