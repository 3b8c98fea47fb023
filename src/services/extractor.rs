//! Free-text preference extraction
//!
//! Regex-cascade parsing of a self-description into an age and a genre set.
//! Patterns are tried in priority order with early exit on first success for
//! the age, and the synonym table is evaluated before the generic label scan
//! so explicit synonyms always win.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Genre, ParsedPreferences, MAX_AGE, MIN_AGE};

/// Age phrasings in priority order; only the first match is used
static AGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bi\s*am\s+(\d+)\b",
        r"\bi'm\s+(\d+)\b",
        r"мне\s+(\d+)\s+лет",
        r"\bage\s*:?\s*(\d+)\b",
        r"возраст\s*:?\s*(\d+)",
        r"\b(\d+)\s+years?\b",
        r"(\d+)\s+лет",
        r"\bя\s+(\d+)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Preference-introducing phrasings; every match contributes its trailing span
static GENRE_SPAN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"i\s+like\s*:?\s*([^.]+)",
        r"i\s+love\s*:?\s*([^.]+)",
        r"i'?m\s+into\s*:?\s*([^.]+)",
        r"interests?\s*:?\s*([^.]+)",
        r"preferences?\s*:?\s*([^.]+)",
        r"genres?\s*:?\s*([^.]+)",
        r"мне\s+нравятся?\s*:?\s*([^.]+)",
        r"люблю\s*:?\s*([^.]+)",
        r"интересы?\s*:?\s*([^.]+)",
        r"предпочтения?\s*:?\s*([^.]+)",
        r"жанры?\s*:?\s*([^.]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static TOKEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,.;-]").unwrap());

/// Colloquial genre names mapped to canonical labels
static SYNONYMS: &[(&str, Genre)] = &[
    ("инди", Genre::Indie),
    ("ролевые", Genre::Rpg),
    ("экшен", Genre::Action),
    ("экшн", Genre::Action),
    ("приключения", Genre::Adventure),
    ("стратегия", Genre::Strategy),
    ("стратегии", Genre::Strategy),
    ("симулятор", Genre::Simulation),
    ("симуляторы", Genre::Simulation),
    ("головоломка", Genre::Puzzle),
    ("головоломки", Genre::Puzzle),
    ("ужасы", Genre::Horror),
    ("хоррор", Genre::Horror),
    ("гонки", Genre::Racing),
    ("спорт", Genre::Sports),
    ("спортивные", Genre::Sports),
];

/// Canonical labels lowered once for containment scans
static LOWER_LABELS: Lazy<Vec<(String, Genre)>> = Lazy::new(|| {
    Genre::ALL
        .iter()
        .map(|genre| (genre.label().to_lowercase(), *genre))
        .collect()
});

/// Extracts an age and a set of preferred genres from arbitrary text
#[derive(Debug, Default)]
pub struct PreferenceExtractor;

impl PreferenceExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, input: &str) -> ParsedPreferences {
        let raw_text = input.trim().to_string();
        let lowered = raw_text.to_lowercase();

        let age = extract_age(&lowered);
        let genres = extract_genres(&lowered);

        tracing::debug!(
            age = ?age,
            genre_count = genres.len(),
            "input parsed"
        );

        ParsedPreferences {
            age,
            genres,
            raw_text,
        }
    }

    /// Example phrasings the extractor is guaranteed to understand
    pub fn parsing_examples(&self) -> &'static [&'static str] {
        &[
            "I am 13 years old, I like: RPG, indie",
            "Age: 25, I love Action and Strategy",
            "I'm 18, interests: Horror, Adventure",
            "Age 16, I like Racing and Sports",
            "Мне 30 лет, предпочтения: Simulation, Puzzle",
        ]
    }
}

fn extract_age(text: &str) -> Option<u8> {
    for pattern in AGE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(age) = captures.get(1).and_then(|m| m.as_str().parse::<u8>().ok()) {
                if (MIN_AGE..=MAX_AGE).contains(&age) {
                    return Some(age);
                }
            }
            // Out-of-range match: fall through to the next pattern
        }
    }
    None
}

fn extract_genres(text: &str) -> HashSet<Genre> {
    let mut found = HashSet::new();

    // Phase 1: spans following a preference-introducing phrase
    for pattern in GENRE_SPAN_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(span) = captures.get(1) {
                genres_in_span(span.as_str(), &mut found);
            }
        }
    }

    // Phase 2: direct label mentions anywhere in the input
    if found.is_empty() {
        for (label, genre) in LOWER_LABELS.iter() {
            if text.contains(label.as_str()) {
                found.insert(*genre);
            }
        }
    }

    found
}

fn genres_in_span(span: &str, found: &mut HashSet<Genre>) {
    // Synonyms first, so a colloquial name always resolves
    for (token, genre) in SYNONYMS {
        if span.contains(token) {
            found.insert(*genre);
        }
    }

    for part in TOKEN_SPLIT.split(span) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        for (label, genre) in LOWER_LABELS.iter() {
            if part.contains(label.as_str()) {
                found.insert(*genre);
            }
        }
    }
}
